//! wavelab effect-chain documents
//!
//! An effect chain is a JSON document naming an input WAV file, an ordered
//! list of processing steps and an output path:
//!
//! ```
//! use wavelab_spec::{EffectChain, Step};
//! use wavelab_spec::validation::validate_chain;
//!
//! let chain = EffectChain::from_json(r#"{
//!     "input": { "path": "car.wav", "stereo": true },
//!     "steps": [
//!         { "type": "pan" },
//!         { "type": "echo", "count": 5, "delay_seconds": 0.3, "decay": 0.6 }
//!     ],
//!     "output": "car_pan.wav"
//! }"#).unwrap();
//!
//! assert_eq!(chain.steps[0], Step::Pan {});
//! assert!(validate_chain(&chain).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`chain`]: Chain document types
//! - [`error`]: Error and warning types
//! - [`validation`]: Chain validation

pub mod chain;
pub mod error;
pub mod validation;

pub use chain::{ChainInput, EffectChain, Step};
pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use validation::validate_chain;
