pub mod exchanger;
