pub mod bootstrap;
pub mod quantum_trader;

pub use bootstrap::Bootstrapper;
pub use quantum_trader::QuantumTrader;
