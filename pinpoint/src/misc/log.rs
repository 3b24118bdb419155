/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
Warnings found while encoding are always logged at the `warn` level, whether or not they abort an encoding.

Note, no log implementation is provided.
The CLI and the test crate install [env_logger](https://docs.rs/env_logger) behind a `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [reading inputs](crate::builder)
    pub const PARSE: &str = "parse";

    /// Logs related to the [WCNF encoding](crate::procedures::encode)
    pub const ENCODE: &str = "encode";

    /// Logs related to [module extraction](crate::procedures::extract)
    pub const EXTRACT: &str = "extract";

    /// Logs related to [index maps](crate::structures::index_map)
    pub const INDEX: &str = "index";
}
