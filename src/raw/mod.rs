mod arena;
mod handle;
mod node;
mod raw_tree;
mod render;
mod rotate;
mod shape;
mod validate;
mod walk;

pub(crate) use handle::Handle;
pub(crate) use node::Side;
pub(crate) use raw_tree::{RawTree, Vacancy};
pub(crate) use walk::Walk;
