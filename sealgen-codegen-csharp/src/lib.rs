//! C# generators for sealgen.
//!
//! Three engines turn descriptors into self-contained C# compilation units:
//!
//! - [`EnumMatchGenerator`] - exhaustive `Match` extension methods for an enum
//! - [`UnionGenerator`] - a closed union as an abstract record with sealed
//!   variants, smart constructors and an exhaustive `Match`
//! - [`LambdaGenerator`] - constructors and methods as static `Func` fields
//!
//! [`Generator`] runs all three over a [`DescriptorSet`](sealgen_ir::DescriptorSet).
//!
//! ```ignore
//! use sealgen_codegen_csharp::{Generator, LanguageCodegen};
//! use std::path::Path;
//!
//! let generator = Generator::new(set);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("Generated"))?;
//! ```

mod enum_match;
mod generator;
mod hierarchy;
mod lambda;
mod syntax;
mod union;

pub use enum_match::EnumMatchGenerator;
pub use generator::Generator;
pub use hierarchy::open_type_hierarchy;
pub use lambda::{LambdaGenerator, LambdaGroup, group_callables};
pub use sealgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use syntax::{AUTO_GENERATED_HEADER, fresh_name};
pub use union::UnionGenerator;
