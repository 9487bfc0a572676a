// Adapters layer: concrete variants of the domain capabilities. All bodies are
// illustrative placeholders; none of them touches a real file, database, or
// geometry routine.

pub mod loggers;
pub mod orders;
pub mod shapes;
