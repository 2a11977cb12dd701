/*!
Configuration of resolution and of a knowledge base.

All configuration is contained within [Config].
A knowledge base holds a copy of the configuration it was created from, and procedures are passed a reference to a configuration.
*/

mod config_option;
pub use config_option::ConfigOption;

mod pivot_policy;
pub use pivot_policy::PivotPolicy;

/// A count of (distinct) clauses derived by resolution.
pub type DerivationCount = usize;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// How to resolve a pair of clauses with more than one pivot.
    pub multiple_pivots: ConfigOption<PivotPolicy>,

    /// The maximum number of clauses a knowledge base may derive when answering a query.
    pub derivation_limit: ConfigOption<DerivationCount>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            multiple_pivots: ConfigOption {
                name: "multiple_pivots",
                min: PivotPolicy::MIN,
                max: PivotPolicy::MAX,
                value: PivotPolicy::Reject,
            },

            derivation_limit: ConfigOption {
                name: "derivation_limit",
                min: 1,
                max: DerivationCount::MAX,
                value: 10_000,
            },
        }
    }
}
