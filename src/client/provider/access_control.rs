use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::model::{error::ProviderError, query::QueryState},
    model::access::{Action, CanRequest, CanResponse},
};

pub type CanFuture = Pin<Box<dyn Future<Output = Result<CanResponse, ProviderError>>>>;

/// Answers "can the current actor perform this action" questions.
pub trait AccessControlProvider {
    fn can(&self, request: CanRequest) -> CanFuture;
}

/// Context handle around the host's [`AccessControlProvider`].
#[derive(Clone)]
pub struct AccessControl {
    provider: Rc<dyn AccessControlProvider>,
}

impl AccessControl {
    pub fn new(provider: impl AccessControlProvider + 'static) -> Self {
        Self {
            provider: Rc::new(provider),
        }
    }

    pub async fn can(&self, request: CanRequest) -> Result<CanResponse, ProviderError> {
        self.provider.can(request).await
    }
}

impl PartialEq for AccessControl {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.provider), Rc::as_ptr(&other.provider))
    }
}

/// Answer of one access check, tagged with the request it was made for.
#[derive(Clone, Debug, PartialEq)]
pub struct CanAnswer {
    pub request: CanRequest,
    pub result: Result<CanResponse, ProviderError>,
}

/// Run one access check. Without a provider every action is allowed.
pub async fn check_can(
    access_control: Option<AccessControl>,
    request: CanRequest,
) -> Result<CanResponse, ProviderError> {
    let Some(access_control) = access_control else {
        return Ok(CanResponse::allow());
    };

    tracing::debug!(
        "Checking access for {} on {}",
        request.action,
        request.resource
    );
    let result = access_control.can(request.clone()).await;
    if let Err(err) = &result {
        tracing::warn!(
            "Access check for {} on {} failed: {}",
            request.action,
            request.resource,
            err
        );
    }
    result
}

/// State of the check for `request` given the last stored answer.
///
/// An answer made for a different request is not shown; the new check reads
/// as loading until it completes.
pub fn can_state(
    answer: Option<&CanAnswer>,
    request: &CanRequest,
    enabled: bool,
) -> QueryState<CanResponse> {
    if !enabled {
        return QueryState::Disabled;
    }

    match answer {
        Some(answer) if answer.request == *request => Some(answer.result.clone()).into(),
        _ => QueryState::Loading,
    }
}

/// Query the access control provider without blocking the render.
///
/// Returns [`QueryState::Disabled`] when `enabled` is false, in which case the
/// provider is never called. Without a provider in context every action is
/// allowed.
pub fn use_can(request: CanRequest, enabled: bool) -> QueryState<CanResponse> {
    let access_control = try_use_context::<AccessControl>();

    let query = use_resource(use_reactive!(|request, enabled| {
        let access_control = access_control.clone();
        async move {
            if !enabled {
                return None;
            }

            let result = check_can(access_control, request.clone()).await;
            Some(CanAnswer { request, result })
        }
    }));

    let state = can_state(
        (*query.read()).as_ref().and_then(Option::as_ref),
        &request,
        enabled,
    );
    state
}

/// Remembers every successful answer of the wrapped provider, keyed by the
/// full request. Failed checks are retried on the next call.
pub struct CachedAccessControl<P> {
    inner: P,
    cache: Rc<RefCell<HashMap<CanRequest, CanResponse>>>,
}

impl<P> CachedAccessControl<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Rc::default(),
        }
    }

    pub fn invalidate(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<P: AccessControlProvider> AccessControlProvider for CachedAccessControl<P> {
    fn can(&self, request: CanRequest) -> CanFuture {
        let cached = self.cache.borrow().get(&request).cloned();
        if let Some(response) = cached {
            return Box::pin(async move { Ok(response) });
        }

        let future = self.inner.can(request.clone());
        let cache = self.cache.clone();
        Box::pin(async move {
            let response = future.await?;
            cache.borrow_mut().insert(request, response.clone());
            Ok(response)
        })
    }
}

/// Answers from a fixed rule table, falling back to a default answer.
#[derive(Clone, Debug)]
pub struct StaticAccessControl {
    rules: HashMap<(String, Action), CanResponse>,
    fallback: CanResponse,
}

impl Default for StaticAccessControl {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            fallback: CanResponse::allow(),
        }
    }
}

impl StaticAccessControl {
    pub fn allow(mut self, resource: impl Into<String>, action: Action) -> Self {
        self.rules
            .insert((resource.into(), action), CanResponse::allow());
        self
    }

    pub fn deny(
        mut self,
        resource: impl Into<String>,
        action: Action,
        reason: Option<&str>,
    ) -> Self {
        self.rules.insert(
            (resource.into(), action),
            CanResponse::deny(reason.map(str::to_string)),
        );
        self
    }

    /// Answer given to requests no rule matches
    pub fn otherwise(mut self, fallback: CanResponse) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn check(&self, request: &CanRequest) -> CanResponse {
        self.rules
            .get(&(request.resource.clone(), request.action))
            .unwrap_or(&self.fallback)
            .clone()
    }
}

impl AccessControlProvider for StaticAccessControl {
    fn can(&self, request: CanRequest) -> CanFuture {
        let response = self.check(&request);
        Box::pin(async move { Ok(response) })
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use super::*;

    struct CountingProvider {
        calls: Rc<Cell<usize>>,
        fail: bool,
    }

    impl AccessControlProvider for CountingProvider {
        fn can(&self, _request: CanRequest) -> CanFuture {
            self.calls.set(self.calls.get() + 1);
            let fail = self.fail;
            Box::pin(async move {
                if fail {
                    Err(ProviderError::Request("offline".to_string()))
                } else {
                    Ok(CanResponse::allow())
                }
            })
        }
    }

    #[tokio::test]
    async fn static_rules_match_resource_and_action() {
        let access = StaticAccessControl::default()
            .deny("posts", Action::Create, Some("no access"))
            .allow("posts", Action::List);

        let denied = access
            .can(CanRequest::new("posts", Action::Create))
            .await
            .unwrap();
        let allowed = access
            .can(CanRequest::new("posts", Action::List))
            .await
            .unwrap();
        let unmatched = access
            .can(CanRequest::new("users", Action::Create))
            .await
            .unwrap();

        assert_eq!(denied, CanResponse::deny(Some("no access".to_string())));
        assert!(allowed.can);
        assert!(unmatched.can);
    }

    #[tokio::test]
    async fn static_fallback_can_deny_everything() {
        let access = StaticAccessControl::default().otherwise(CanResponse::deny(None));

        let response = access
            .can(CanRequest::new("posts", Action::Delete))
            .await
            .unwrap();

        assert!(!response.can);
        assert_eq!(response.reason, None);
    }

    #[tokio::test]
    async fn cache_answers_repeated_requests_once() {
        let calls = Rc::new(Cell::new(0));
        let access = CachedAccessControl::new(CountingProvider {
            calls: calls.clone(),
            fail: false,
        });

        access
            .can(CanRequest::new("posts", Action::Create))
            .await
            .unwrap();
        access
            .can(CanRequest::new("posts", Action::Create))
            .await
            .unwrap();
        access
            .can(CanRequest::new("posts", Action::Edit))
            .await
            .unwrap();

        assert_eq!(calls.get(), 2);

        access.invalidate();
        access
            .can(CanRequest::new("posts", Action::Create))
            .await
            .unwrap();

        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn cache_does_not_remember_failures() {
        let calls = Rc::new(Cell::new(0));
        let access = CachedAccessControl::new(CountingProvider {
            calls: calls.clone(),
            fail: true,
        });

        let first = access.can(CanRequest::new("posts", Action::Create)).await;
        let second = access.can(CanRequest::new("posts", Action::Create)).await;

        assert!(first.is_err());
        assert!(second.is_err());
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn missing_provider_allows_everything() {
        let response = check_can(None, CanRequest::new("posts", Action::Delete))
            .await
            .unwrap();

        assert_eq!(response, CanResponse::allow());
    }

    #[tokio::test]
    async fn check_reports_provider_failures() {
        let calls = Rc::new(Cell::new(0));
        let access = AccessControl::new(CountingProvider {
            calls: calls.clone(),
            fail: true,
        });

        let result = check_can(Some(access), CanRequest::new("posts", Action::Create)).await;

        assert_eq!(result, Err(ProviderError::Request("offline".to_string())));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn answer_for_another_request_reads_as_loading() {
        let categories = CanRequest::new("categories", Action::Create);
        let posts = CanRequest::new("posts", Action::Create);
        let answer = CanAnswer {
            request: categories.clone(),
            result: Ok(CanResponse::deny(Some("Only editors".to_string()))),
        };

        assert_eq!(
            can_state(Some(&answer), &categories, true),
            QueryState::Fetched(CanResponse::deny(Some("Only editors".to_string())))
        );
        assert_eq!(can_state(Some(&answer), &posts, true), QueryState::Loading);
    }

    #[test]
    fn pending_check_reads_as_loading() {
        let request = CanRequest::new("posts", Action::Create);

        assert_eq!(can_state(None, &request, true), QueryState::Loading);
    }

    #[test]
    fn switched_off_check_ignores_stored_denial() {
        let request = CanRequest::new("posts", Action::Create);
        let answer = CanAnswer {
            request: request.clone(),
            result: Ok(CanResponse::deny(None)),
        };

        assert_eq!(can_state(Some(&answer), &request, false), QueryState::Disabled);
        assert_eq!(can_state(None, &request, false), QueryState::Disabled);
    }

    #[tokio::test]
    async fn context_handle_forwards_to_provider() {
        let access = AccessControl::new(
            StaticAccessControl::default().deny("posts", Action::Create, None),
        );

        let response = access
            .can(CanRequest::new("posts", Action::Create))
            .await
            .unwrap();

        assert!(!response.can);
        assert!(access == access.clone());
    }
}
