mod node;

pub(crate) use self::node::{Child, Node};
