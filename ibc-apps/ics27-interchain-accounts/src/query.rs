//! Serves the read-only queries of the interchain accounts application.
use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::params::{QueryParamsRequest, QueryParamsResponse};

use crate::context::InterchainAccountValidationContext;

/// Returns the module parameters, or their defaults when none are stored.
pub fn query_params<Ctx>(
    ctx: &Ctx,
    _request: QueryParamsRequest,
) -> Result<QueryParamsResponse, InterchainAccountError>
where
    Ctx: InterchainAccountValidationContext,
{
    Ok(QueryParamsResponse {
        params: ctx.get_params()?,
    })
}
