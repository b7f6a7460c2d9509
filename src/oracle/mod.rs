// Classification oracle — trait-based abstraction for the external
// multimodal classifier.
//
// The Oracle trait defines the interface. GeminiOracle implements it over
// the Generative Language REST API. The dispatcher takes an injected
// `Arc<dyn Oracle>`, so the test suite substitutes a scripted double.

pub mod traits;
pub mod gemini;
