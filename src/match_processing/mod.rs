pub mod match_processor;
