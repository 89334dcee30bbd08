mod dev;

pub use dev::DevChainClient;
