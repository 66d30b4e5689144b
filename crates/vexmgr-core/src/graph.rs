//! Interface to the host node graph.
//!
//! The 3D application's node API stays external: the core only needs to
//! create a wrangle node and read/write its `snippet` string parameter.
//! Snippet code is an opaque string to this layer.

use tracing::debug;

/// Name of the code parameter on wrangle nodes.
pub const SNIPPET_PARM: &str = "snippet";

/// An opaque handle to a node in the host graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// The wrangle node types snippets can be inserted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrangleKind {
    AttribWrangle,
    DeformationWrangle,
    RigAttribWrangle,
    VolumeWrangle,
    GeometryWrangle,
    PopWrangle,
    Wrangle,
    ChannelWrangle,
}

impl WrangleKind {
    /// The host node type name.
    pub fn node_type(&self) -> &'static str {
        match self {
            WrangleKind::AttribWrangle => "attribwrangle",
            WrangleKind::DeformationWrangle => "deformationwrangle",
            WrangleKind::RigAttribWrangle => "rigattribwrangle",
            WrangleKind::VolumeWrangle => "volumewrangle",
            WrangleKind::GeometryWrangle => "geometrywrangle",
            WrangleKind::PopWrangle => "popwrangle",
            WrangleKind::Wrangle => "wrangle",
            WrangleKind::ChannelWrangle => "channelwrangle",
        }
    }

    /// All wrangle kinds, in menu order.
    pub fn all() -> &'static [WrangleKind] {
        &[
            WrangleKind::AttribWrangle,
            WrangleKind::DeformationWrangle,
            WrangleKind::RigAttribWrangle,
            WrangleKind::VolumeWrangle,
            WrangleKind::GeometryWrangle,
            WrangleKind::PopWrangle,
            WrangleKind::Wrangle,
            WrangleKind::ChannelWrangle,
        ]
    }
}

/// Errors from node graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Node {0:?} does not exist")]
    UnknownNode(NodeId),

    #[error("Node {0:?} is not a wrangle node")]
    NotAWrangle(NodeId),

    #[error("Node {node:?} has no parameter {name:?}")]
    UnknownParm { node: NodeId, name: String },

    #[error("Invalid context to create a {0:?} node")]
    InvalidContext(&'static str),
}

/// The slice of the host node-graph API the core consumes.
pub trait NodeGraph {
    /// Creates a wrangle node of the given kind under the current parent.
    fn create_wrangle(&mut self, kind: WrangleKind) -> Result<NodeId, GraphError>;

    /// The wrangle kind of a node, or `None` for non-wrangle nodes.
    fn node_kind(&self, node: NodeId) -> Option<WrangleKind>;

    /// Reads a named string parameter.
    fn parm(&self, node: NodeId, name: &str) -> Result<String, GraphError>;

    /// Writes a named string parameter.
    fn set_parm(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), GraphError>;
}

/// Inserts VEX code into a wrangle node's snippet parameter.
///
/// Existing code is kept; the new code is appended after a blank line.
pub fn insert_vex_code(
    graph: &mut impl NodeGraph,
    node: NodeId,
    code: &str,
) -> Result<(), GraphError> {
    if graph.node_kind(node).is_none() {
        return Err(GraphError::NotAWrangle(node));
    }

    let current = graph.parm(node, SNIPPET_PARM)?;
    let new_code = if current.is_empty() {
        code.to_string()
    } else {
        format!("{current}\n\n{code}")
    };

    graph.set_parm(node, SNIPPET_PARM, &new_code)?;
    debug!(?node, "snippet inserted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockGraph {
        next_id: u64,
        kinds: HashMap<NodeId, WrangleKind>,
        parms: HashMap<(NodeId, String), String>,
    }

    impl MockGraph {
        fn add_plain_node(&mut self) -> NodeId {
            let id = NodeId(self.next_id);
            self.next_id += 1;
            id
        }
    }

    impl NodeGraph for MockGraph {
        fn create_wrangle(&mut self, kind: WrangleKind) -> Result<NodeId, GraphError> {
            let id = NodeId(self.next_id);
            self.next_id += 1;
            self.kinds.insert(id, kind);
            self.parms
                .insert((id, SNIPPET_PARM.to_string()), String::new());
            Ok(id)
        }

        fn node_kind(&self, node: NodeId) -> Option<WrangleKind> {
            self.kinds.get(&node).copied()
        }

        fn parm(&self, node: NodeId, name: &str) -> Result<String, GraphError> {
            self.parms
                .get(&(node, name.to_string()))
                .cloned()
                .ok_or_else(|| GraphError::UnknownParm {
                    node,
                    name: name.to_string(),
                })
        }

        fn set_parm(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), GraphError> {
            self.parms
                .insert((node, name.to_string()), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn insert_into_empty_snippet() {
        let mut graph = MockGraph::default();
        let node = graph.create_wrangle(WrangleKind::AttribWrangle).unwrap();

        insert_vex_code(&mut graph, node, "@P += @N;").unwrap();
        assert_eq!(graph.parm(node, SNIPPET_PARM).unwrap(), "@P += @N;");
    }

    #[test]
    fn insert_appends_after_blank_line() {
        let mut graph = MockGraph::default();
        let node = graph.create_wrangle(WrangleKind::Wrangle).unwrap();

        insert_vex_code(&mut graph, node, "int a = 1;").unwrap();
        insert_vex_code(&mut graph, node, "int b = 2;").unwrap();
        assert_eq!(
            graph.parm(node, SNIPPET_PARM).unwrap(),
            "int a = 1;\n\nint b = 2;"
        );
    }

    #[test]
    fn insert_rejects_non_wrangle_nodes() {
        let mut graph = MockGraph::default();
        let node = graph.add_plain_node();

        assert!(matches!(
            insert_vex_code(&mut graph, node, "x"),
            Err(GraphError::NotAWrangle(_))
        ));
    }

    #[test]
    fn wrangle_kinds_map_to_node_types() {
        assert_eq!(WrangleKind::AttribWrangle.node_type(), "attribwrangle");
        assert_eq!(WrangleKind::ChannelWrangle.node_type(), "channelwrangle");
        assert_eq!(WrangleKind::all().len(), 8);
    }
}
