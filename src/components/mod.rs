pub mod canvas;
pub mod matching;
pub mod network;
pub mod nlp;
