use std::fmt::Debug;

use crate::types::EntryNode;

/// Renders the subtree under `node` one node per line, children indented
/// under their parent.
pub fn print<K, V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: EntryNode<K, V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, V, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.key(),
                n.entry().value()
            )
        }
    }
}
