// Multilink services
// Services handle the side-effectful edges: launching the browser and the flat on-disk vault.

pub mod link_opener;
pub mod link_vault;
