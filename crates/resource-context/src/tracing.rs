//! # Observability & Tracing
//!
//! [`setup_tracing`] initialises structured logging for binaries built on this crate.
//! Libraries never call it; they only emit events.
//!
//! ## What Gets Traced
//!
//! - **Registry writes**: every stored resource with its `kind`, `key` and registry `size`
//! - **Overwrites**: a `set_resource` on a key that already exists (`warn`)
//! - **Lookups**: every existence check, with `found` (`debug`)
//! - **Stack mapping**: which stack a key was assigned to (`debug`)
//! - **Ordering failures**: dependency cycles (`warn`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default when RUST_LOG is unset)
//! cargo run
//!
//! # Include lookups, reuse decisions and stack mapping
//! RUST_LOG=debug cargo run
//!
//! # Only the registry
//! RUST_LOG=resource_context=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! Two `@model` types, `Widget` then `Gadget`, naming the same function. The compact
//! format prints the active spans (`object`, `ensure`, `attach`) in front of each event.
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO object:ensure: Stored kind="Role" key=SharedFnEnvUsEast1A7BF4CCELambdaDataSourceRole size=1
//! INFO object:ensure: Created purpose=Role key=SharedFnEnvUsEast1A7BF4CCELambdaDataSourceRole stack=ModelFunctionStack
//! INFO object:ensure: Stored kind="DataSource" key=SharedFnEnvUsEast1A7BF4CCELambdaDataSource size=2
//! INFO object:ensure: Stored kind="FunctionConfig" key=InvokeSharedFnEnvUsEast1A7BF4CCELambdaDataSource size=3
//! INFO object:attach: Stored kind="Resolver" key=MutationCreateWidgetResolver size=4
//! INFO object: Attached model function function=shared-fn-${env} resolvers=5
//! INFO object:attach: Stored kind="Resolver" key=MutationCreateGadgetResolver size=9
//! INFO Schema transformed types=2
//! ```
//!
//! **With `RUST_LOG=debug`**, the second type shows the shared resources being reused
//! instead of stored:
//!
//! ```text
//! DEBUG object: Phase change from=Unvalidated to=Validated
//! DEBUG object:ensure: Get key=SharedFnEnvUsEast1A7BF4CCELambdaDataSourceRole found=true
//! DEBUG object:ensure: Reusing existing resource purpose=Role key=SharedFnEnvUsEast1A7BF4CCELambdaDataSourceRole
//! DEBUG object: Phase change from=Validated to=GraphBuilt
//! ```
//!
//! A `warn` line from the registry (`Overwrote existing resource`) means the same
//! type was transformed twice in one pass.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber, filtered by `RUST_LOG` and defaulting to `info`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
