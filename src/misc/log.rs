/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when tracing how some clause was (or was not) derived.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the construction of [clauses](crate::structures::clause)
    pub const CLAUSE: &str = "clause";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [configuration](crate::config)
    pub const CONFIG: &str = "config";

    /// Logs related to the [knowledge base](crate::kb)
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";
}
