//! Test utilities.

use jsonmodel_core::DynamicModel;

use crate::config::Config;
use crate::context::JsonContext;

pub fn model(json: &str) -> DynamicModel {
    DynamicModel::from_json(json).expect("valid model description")
}

/// Run the given roots in order and return the context.
pub fn run<'m>(
    model: &'m DynamicModel,
    config: Config,
    roots: &[&str],
) -> JsonContext<'m, DynamicModel> {
    let mut ctx = JsonContext::new(model, config);
    for root in roots {
        ctx.add_root(root).expect("root resolves");
    }
    ctx
}

/// Registered names, one per line, in registration order.
pub fn registered(ctx: &JsonContext<'_, DynamicModel>) -> String {
    ctx.registry().names().collect::<Vec<_>>().join("\n")
}
