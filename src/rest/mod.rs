/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod connection;
mod parsers;
pub mod signer;
pub mod photo;
pub mod sizes;
pub mod properties;
pub mod errors;

pub use api::*;
pub use connection::*;
pub use errors::*;
pub use photo::*;
pub use properties::*;
pub use sizes::*;
