#![allow(missing_docs)]

mod util;
mod v2;
mod v3;
mod v4;
