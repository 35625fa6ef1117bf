use std::collections::BTreeMap;
use std::future::Future;

use crate::error::AgentError;

/// An action name plus stringly-typed parameters, ready to post to the
/// gateway's `/actions` endpoint. The gateway owns all validation; the
/// resolver only has to name things.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAction {
    pub action: String,
    pub parameters: BTreeMap<String, String>,
}

/// Turns free-form text into a [`ResolvedAction`].
pub trait ActionResolver {
    fn resolve(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<ResolvedAction, AgentError>> + Send;
}
