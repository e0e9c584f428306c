//! Generate Story use case
//!
//! Drives a story request through the primary provider's candidate models
//! and prompt variants with exponential backoff, then through the secondary
//! providers in priority order.
//!
//! The control flow lives in [`RetrySchedule`]; this module performs the
//! calls and waits each [`GenerationState`] asks for and records every call
//! in the attempt trail.

use crate::config::GenerationParams;
use crate::ports::progress::{GenerationProgress, NoGenerationProgress};
use crate::ports::story_provider::{PrimaryProvider, SecondaryProvider};
use artisan_domain::util::preview;
use artisan_domain::{
    AttemptOutcome, DomainError, GeneratedStory, GenerationConfig, GenerationFailure,
    GenerationOutcome, GenerationRequest, GenerationState, PromptVariants, ProviderAttempt,
    RetrySchedule, SafetySetting, StepEvent, StoryModel, StoryPromptTemplate,
    is_acceptable_story, sanitize,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Errors that abort a story request before it reaches an outcome
#[derive(Error, Debug)]
pub enum GenerateStoryError {
    /// The request failed domain validation (e.g. an unknown model)
    #[error(transparent)]
    InvalidRequest(#[from] DomainError),

    #[error("Operation cancelled")]
    Cancelled,
}

/// Use case for generating a story with retries and provider fallback
pub struct GenerateStoryUseCase {
    primary: Arc<dyn PrimaryProvider>,
    secondaries: Vec<Arc<dyn SecondaryProvider>>,
    params: GenerationParams,
}

impl Clone for GenerateStoryUseCase {
    fn clone(&self) -> Self {
        Self {
            primary: self.primary.clone(),
            secondaries: self.secondaries.clone(),
            params: self.params,
        }
    }
}

/// Per-request inputs computed once up front
struct PreparedRequest {
    sanitized: String,
    variants: PromptVariants,
    candidates: Vec<StoryModel>,
}

impl GenerateStoryUseCase {
    pub fn new(primary: Arc<dyn PrimaryProvider>) -> Self {
        Self {
            primary,
            secondaries: Vec::new(),
            params: GenerationParams::default(),
        }
    }

    /// Append a secondary provider; earlier ones are tried first.
    pub fn with_secondary(mut self, provider: Arc<dyn SecondaryProvider>) -> Self {
        self.secondaries.push(provider);
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Validate the model identifier, then execute.
    ///
    /// Unknown models fail with [`GenerateStoryError::InvalidRequest`] before
    /// any provider is contacted.
    pub async fn generate(
        &self,
        prompt: &str,
        model: &str,
    ) -> Result<GenerationOutcome, GenerateStoryError> {
        let request = GenerationRequest::parse(prompt, model)?;
        self.execute(request).await
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationOutcome, GenerateStoryError> {
        self.run(request, &NoGenerationProgress, None).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: GenerationRequest,
        progress: &dyn GenerationProgress,
    ) -> Result<GenerationOutcome, GenerateStoryError> {
        self.run(request, progress, None).await
    }

    /// Execute with progress callbacks, stopping early once `token` is cancelled.
    ///
    /// The token is checked before every provider call and raced against
    /// every backoff wait.
    pub async fn execute_cancellable(
        &self,
        request: GenerationRequest,
        progress: &dyn GenerationProgress,
        token: &CancellationToken,
    ) -> Result<GenerationOutcome, GenerateStoryError> {
        self.run(request, progress, Some(token)).await
    }

    async fn run(
        &self,
        request: GenerationRequest,
        progress: &dyn GenerationProgress,
        token: Option<&CancellationToken>,
    ) -> Result<GenerationOutcome, GenerateStoryError> {
        if !self.primary.is_configured() {
            let message = format!("{} API key not configured", self.primary.name());
            error!("{}", message);
            return Ok(GenerationOutcome::Failure(GenerationFailure::configuration(
                message,
            )));
        }

        info!(
            model = %request.model(),
            "Generating story: {}",
            preview(request.raw_prompt(), 80)
        );

        let sanitized = sanitize(request.raw_prompt());
        let prepared = PreparedRequest {
            variants: StoryPromptTemplate::variants(&sanitized),
            candidates: request.model().candidates(),
            sanitized,
        };

        let schedule = RetrySchedule::new(self.params.max_attempts, self.params.backoff_base)
            .with_model_count(prepared.candidates.len())
            .with_fallback_count(self.secondaries.len());

        let mut attempts: Vec<ProviderAttempt> = Vec::new();
        let mut story: Option<(String, String)> = None;
        let mut state = GenerationState::NotStarted;

        loop {
            state = match state {
                GenerationState::NotStarted => schedule.transition(state, StepEvent::Start),
                GenerationState::Attempting {
                    attempt,
                    model_index,
                } => {
                    check_cancelled(token)?;
                    let model = prepared.candidates[model_index];
                    progress.on_attempt_start(self.primary.name(), model.as_str(), attempt);

                    let record = self.attempt_primary(&prepared, model, attempt).await;
                    progress.on_attempt_complete(&record);

                    let event = accept(&record, &mut story);
                    attempts.push(record);
                    schedule.transition(state, event)
                }
                GenerationState::Backoff {
                    next_attempt,
                    delay,
                } => {
                    debug!("Retrying after {:?}...", delay);
                    progress.on_backoff(next_attempt, delay);
                    wait(delay, token).await?;
                    schedule.transition(state, StepEvent::BackoffElapsed)
                }
                GenerationState::Fallback { index } => {
                    if index == 0 {
                        info!(
                            "All {} attempts failed, trying alternative providers...",
                            self.primary.name()
                        );
                    }
                    check_cancelled(token)?;
                    let provider = &self.secondaries[index];
                    progress.on_fallback(provider.name());

                    let record = attempt_secondary(provider.as_ref(), &prepared.sanitized).await;
                    progress.on_attempt_complete(&record);

                    let event = accept(&record, &mut story);
                    attempts.push(record);
                    schedule.transition(state, event)
                }
                GenerationState::Succeeded => {
                    let (text, model_used) = story.take().unwrap_or_default();
                    return Ok(GenerationOutcome::Success(GeneratedStory {
                        text,
                        model_used,
                        attempts,
                    }));
                }
                GenerationState::Exhausted => {
                    warn!(
                        "All providers exhausted after {} calls",
                        attempts.len()
                    );
                    return Ok(GenerationOutcome::Failure(GenerationFailure::exhausted(
                        attempts,
                    )));
                }
            };
        }
    }

    /// One primary-provider call with the variant for `attempt`
    async fn attempt_primary(
        &self,
        prepared: &PreparedRequest,
        model: StoryModel,
        attempt: u32,
    ) -> ProviderAttempt {
        let prompt = prepared.variants.for_attempt(attempt);
        let result = self
            .primary
            .generate(
                model,
                prompt,
                &GenerationConfig::STORY,
                &SafetySetting::permissive(),
            )
            .await;

        let outcome = match result {
            Ok(response) => match response.extract_text() {
                Some(text) if is_acceptable_story(&text) => {
                    debug!(
                        "Story generated successfully on attempt {} using {}",
                        attempt, model
                    );
                    AttemptOutcome::Success { text }
                }
                Some(text) => {
                    debug!(
                        "Attempt {} with {} returned only {} characters",
                        attempt,
                        model,
                        text.chars().count()
                    );
                    AttemptOutcome::Insufficient {
                        length: text.chars().count(),
                    }
                }
                None => {
                    debug!("Attempt {} with {} returned no text", attempt, model);
                    AttemptOutcome::Insufficient { length: 0 }
                }
            },
            Err(e) => {
                debug!("Attempt {} with {} failed: {}", attempt, model, e.message);
                AttemptOutcome::from_error(e.kind, e.message)
            }
        };

        ProviderAttempt::new(
            self.primary.name(),
            model.as_str(),
            Some(PromptVariants::index_for_attempt(attempt)),
            outcome,
        )
    }
}

/// One secondary-provider call with the sanitized prompt
async fn attempt_secondary(provider: &dyn SecondaryProvider, sanitized: &str) -> ProviderAttempt {
    let outcome = if !provider.is_configured() {
        debug!("{} API key not configured, skipping", provider.name());
        AttemptOutcome::NotConfigured
    } else {
        match provider.generate(sanitized).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    debug!("{} fallback returned empty text", provider.name());
                    AttemptOutcome::Insufficient { length: 0 }
                } else {
                    debug!(
                        "Story generated successfully using {} fallback",
                        provider.name()
                    );
                    AttemptOutcome::Success {
                        text: text.to_string(),
                    }
                }
            }
            Err(e) => {
                debug!("{} fallback failed: {}", provider.name(), e.message);
                AttemptOutcome::from_error(e.kind, e.message)
            }
        }
    };

    ProviderAttempt::new(provider.name(), provider.model(), None, outcome)
}

/// Turn a call record into a state machine event, keeping the story on success
fn accept(record: &ProviderAttempt, story: &mut Option<(String, String)>) -> StepEvent {
    match &record.outcome {
        AttemptOutcome::Success { text } => {
            *story = Some((text.clone(), record.model.clone()));
            StepEvent::Accepted
        }
        _ => StepEvent::Rejected,
    }
}

fn check_cancelled(token: Option<&CancellationToken>) -> Result<(), GenerateStoryError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(GenerateStoryError::Cancelled);
    }
    Ok(())
}

/// Suspend for `delay` without blocking the runtime thread
async fn wait(delay: Duration, token: Option<&CancellationToken>) -> Result<(), GenerateStoryError> {
    match token {
        Some(token) => tokio::select! {
            _ = token.cancelled() => Err(GenerateStoryError::Cancelled),
            _ = tokio::time::sleep(delay) => Ok(()),
        },
        None => {
            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::story_provider::ProviderError;
    use artisan_domain::{FailureClassification, FailureReason, ProviderResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    type Reply = Box<dyn Fn(usize, StoryModel, &str) -> Result<ProviderResponse, ProviderError> + Send + Sync>;

    struct MockPrimary {
        configured: bool,
        reply: Reply,
        calls: Mutex<Vec<(StoryModel, String)>>,
    }

    impl MockPrimary {
        fn new(
            reply: impl Fn(usize, StoryModel, &str) -> Result<ProviderResponse, ProviderError>
            + Send
            + Sync
            + 'static,
        ) -> Self {
            Self {
                configured: true,
                reply: Box::new(reply),
                calls: Mutex::new(vec![]),
            }
        }

        fn unconfigured() -> Self {
            Self {
                configured: false,
                ..Self::new(|_, _, _| Ok(ProviderResponse::direct(long_story())))
            }
        }

        fn calls(&self) -> Vec<(StoryModel, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PrimaryProvider for MockPrimary {
        fn name(&self) -> &str {
            "gemini"
        }

        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn generate(
            &self,
            model: StoryModel,
            prompt: &str,
            config: &GenerationConfig,
            safety: &[SafetySetting],
        ) -> Result<ProviderResponse, ProviderError> {
            assert_eq!(*config, GenerationConfig::STORY);
            assert_eq!(safety.len(), 4);
            let index = {
                let mut calls = self.calls.lock().unwrap();
                calls.push((model, prompt.to_string()));
                calls.len() - 1
            };
            (self.reply)(index, model, prompt)
        }
    }

    struct MockSecondary {
        name: &'static str,
        configured: bool,
        reply: Result<String, ProviderError>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl MockSecondary {
        fn new(name: &'static str, reply: Result<String, ProviderError>) -> Arc<Self> {
            Arc::new(Self {
                name,
                configured: true,
                reply,
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(vec![]),
            })
        }

        fn unconfigured(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                configured: false,
                reply: Ok("unused".to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(vec![]),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SecondaryProvider for MockSecondary {
        fn name(&self) -> &str {
            self.name
        }

        fn model(&self) -> &str {
            match self.name {
                "openai" => "gpt-3.5-turbo",
                _ => "microsoft/DialoGPT-large",
            }
        }

        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        backoffs: Mutex<Vec<(u32, Duration)>>,
        fallbacks: Mutex<Vec<String>>,
        completed: AtomicUsize,
    }

    impl GenerationProgress for RecordingProgress {
        fn on_attempt_complete(&self, _attempt: &ProviderAttempt) {
            self.completed.fetch_add(1, Ordering::SeqCst);
        }

        fn on_backoff(&self, next_attempt: u32, delay: Duration) {
            self.backoffs.lock().unwrap().push((next_attempt, delay));
        }

        fn on_fallback(&self, provider: &str) {
            self.fallbacks.lock().unwrap().push(provider.to_string());
        }
    }

    fn long_story() -> String {
        "a".repeat(60)
    }

    fn use_case(
        primary: Arc<MockPrimary>,
        secondaries: &[Arc<MockSecondary>],
    ) -> GenerateStoryUseCase {
        secondaries.iter().fold(
            GenerateStoryUseCase::new(primary),
            |uc, s| uc.with_secondary(s.clone()),
        )
    }

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest::new(prompt, StoryModel::Gemini15Flash)
    }

    // ==================== Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_first_call_success() {
        let primary = Arc::new(MockPrimary::new(|_, _, _| {
            Ok(ProviderResponse::direct(long_story()))
        }));
        let progress = RecordingProgress::default();
        let uc = use_case(primary.clone(), &[]);

        let outcome = uc
            .execute_with_progress(request("a potter"), &progress)
            .await
            .unwrap();

        match outcome {
            GenerationOutcome::Success(story) => {
                assert_eq!(story.model_used, "gemini-1.5-flash");
                assert_eq!(story.text, long_story());
                assert_eq!(story.attempts.len(), 1);
            }
            other => panic!("expected success, got {:?}", other),
        }
        assert_eq!(primary.calls().len(), 1);
        assert!(progress.backoffs.lock().unwrap().is_empty());
    }

    /// Counts `info` and `warn` events on the current thread
    #[derive(Clone, Default)]
    struct LoudEvents(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LoudEvents {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if matches!(
                *event.metadata().level(),
                tracing::Level::INFO | tracing::Level::WARN
            ) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempt_results_are_left_to_the_progress_sink() {
        use tracing_subscriber::layer::SubscriberExt;

        let loud = LoudEvents::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(loud.clone()));

        let primary = Arc::new(MockPrimary::new(|index, _, _| match index {
            0 => Err(ProviderError::transient("timeout")),
            _ => Ok(ProviderResponse::direct(long_story())),
        }));
        let progress = RecordingProgress::default();
        let uc = use_case(primary, &[]);

        let outcome = uc
            .execute_with_progress(request("a potter"), &progress)
            .await
            .unwrap();

        assert!(matches!(outcome, GenerationOutcome::Success(_)));
        assert_eq!(progress.completed.load(Ordering::SeqCst), 2);
        assert_eq!(progress.backoffs.lock().unwrap().len(), 1);
        // Only the "Generating story" request line logs above debug
        assert_eq!(loud.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_prompt_is_sanitized_and_framed() {
        let primary = Arc::new(MockPrimary::new(|_, _, _| {
            Ok(ProviderResponse::direct(long_story()))
        }));
        let uc = use_case(primary.clone(), &[]);

        uc.execute(request("  a Hindu weaver  ")).await.unwrap();

        let (_, prompt) = &primary.calls()[0];
        assert!(prompt.starts_with("Write an inspiring story about a skilled craftsperson"));
        assert!(prompt.ends_with(" a spiritual weaver"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_model_used_is_the_model_that_answered() {
        let primary = Arc::new(MockPrimary::new(|_, model, _| match model {
            StoryModel::Gemini15Flash => Err(ProviderError::from_message("404 model not found")),
            _ => Ok(ProviderResponse::direct(long_story())),
        }));
        let uc = use_case(primary.clone(), &[]);

        let outcome = uc.execute(request("a potter")).await.unwrap();
        match outcome {
            GenerationOutcome::Success(story) => {
                assert_eq!(story.model_used, "gemini-1.5-pro");
                assert_eq!(story.attempts[0].outcome, AttemptOutcome::ModelUnavailable);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_text_is_rejected() {
        let primary = Arc::new(MockPrimary::new(|index, _, _| {
            if index == 0 {
                Ok(ProviderResponse::direct("Too short."))
            } else {
                Ok(ProviderResponse::direct(long_story()))
            }
        }));
        let uc = use_case(primary.clone(), &[]);

        let outcome = uc.execute(request("a potter")).await.unwrap();
        assert!(outcome.is_success());
        assert_eq!(
            outcome.attempts()[0].outcome,
            AttemptOutcome::Insufficient { length: 10 }
        );
        assert_eq!(primary.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_safety_everywhere_falls_back_in_order() {
        let primary = Arc::new(MockPrimary::new(|_, _, _| {
            Err(ProviderError::from_message("Response blocked by safety settings"))
        }));
        let openai = MockSecondary::new("openai", Ok("An OpenAI story.".to_string()));
        let huggingface = MockSecondary::new("huggingface", Ok("A HF story.".to_string()));
        let progress = RecordingProgress::default();
        let uc = use_case(primary.clone(), &[openai.clone(), huggingface.clone()]);

        let outcome = uc
            .execute_with_progress(request("a Muslim calligrapher"), &progress)
            .await
            .unwrap();

        assert_eq!(primary.calls().len(), 9);
        assert_eq!(openai.calls(), 1);
        assert_eq!(huggingface.calls(), 0);
        assert_eq!(
            openai.prompts.lock().unwrap().as_slice(),
            &["a religious calligrapher".to_string()]
        );
        assert_eq!(*progress.fallbacks.lock().unwrap(), vec!["openai".to_string()]);
        assert_eq!(progress.completed.load(Ordering::SeqCst), 10);

        match outcome {
            GenerationOutcome::Success(story) => {
                assert_eq!(story.model_used, "gpt-3.5-turbo");
                assert_eq!(story.text, "An OpenAI story.");
                assert_eq!(story.attempts.len(), 10);
                assert_eq!(story.attempts[9].prompt_variant, None);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_variants_advance_per_attempt() {
        let primary = Arc::new(MockPrimary::new(|_, _, _| {
            Err(ProviderError::transient("connection reset"))
        }));
        let uc = use_case(primary.clone(), &[]);

        uc.execute(request("a potter")).await.unwrap();

        let calls = primary.calls();
        let variants = StoryPromptTemplate::variants("a potter");
        let models: Vec<StoryModel> = calls.iter().map(|(m, _)| *m).collect();
        assert_eq!(&models[..3], StoryModel::Gemini15Flash.candidates().as_slice());
        for (i, (_, prompt)) in calls.iter().enumerate() {
            assert_eq!(prompt, &variants.as_slice()[i / 3]);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_secondary_b_after_unconfigured_a() {
        let primary = Arc::new(MockPrimary::new(|_, _, _| {
            Err(ProviderError::safety_blocked("blocked"))
        }));
        let openai = MockSecondary::unconfigured("openai");
        let huggingface = MockSecondary::new("huggingface", Ok("  A HF story.  ".to_string()));
        let uc = use_case(primary, &[openai.clone(), huggingface.clone()]);

        let outcome = uc.execute(request("a potter")).await.unwrap();

        assert_eq!(openai.calls(), 0);
        assert_eq!(huggingface.calls(), 1);
        match outcome {
            GenerationOutcome::Success(story) => {
                assert_eq!(story.text, "A HF story.");
                assert_eq!(story.model_used, "microsoft/DialoGPT-large");
                assert_eq!(story.attempts[9].outcome, AttemptOutcome::NotConfigured);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_everything_fails_after_safety_is_safety_blocked() {
        let primary = Arc::new(MockPrimary::new(|_, _, _| {
            Err(ProviderError::safety_blocked("blocked"))
        }));
        let openai = MockSecondary::new("openai", Err(ProviderError::transient("quota")));
        let huggingface = MockSecondary::new("huggingface", Ok("   ".to_string()));
        let uc = use_case(primary, &[openai, huggingface]);

        let outcome = uc.execute(request("a potter")).await.unwrap();
        match outcome {
            GenerationOutcome::Failure(failure) => {
                assert_eq!(failure.reason, FailureReason::Exhausted);
                assert_eq!(failure.attempts.len(), 11);
                assert_eq!(failure.classify(), FailureClassification::SafetyBlocked);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_everything_fails_without_safety_is_generation_error() {
        let primary = Arc::new(MockPrimary::new(|_, _, _| {
            Err(ProviderError::transient("503 service unavailable"))
        }));
        let uc = use_case(
            primary,
            &[
                MockSecondary::unconfigured("openai"),
                MockSecondary::unconfigured("huggingface"),
            ],
        );

        let outcome = uc.execute(request("a potter")).await.unwrap();
        match outcome {
            GenerationOutcome::Failure(failure) => {
                assert_eq!(failure.classify(), FailureClassification::GenerationError);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_model_makes_no_calls() {
        let primary = Arc::new(MockPrimary::new(|_, _, _| {
            Ok(ProviderResponse::direct(long_story()))
        }));
        let openai = MockSecondary::new("openai", Ok("story".to_string()));
        let uc = use_case(primary.clone(), &[openai.clone()]);

        let err = uc.generate("a potter", "not-a-real-model").await.unwrap_err();

        assert!(matches!(
            err,
            GenerateStoryError::InvalidRequest(DomainError::InvalidModel(_))
        ));
        assert!(primary.calls().is_empty());
        assert_eq!(openai.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_primary_key_fails_fast() {
        let primary = Arc::new(MockPrimary::unconfigured());
        let openai = MockSecondary::unconfigured("openai");
        let progress = RecordingProgress::default();
        let uc = use_case(primary.clone(), &[openai.clone()]);

        let outcome = uc
            .execute_with_progress(request("a potter"), &progress)
            .await
            .unwrap();

        match outcome {
            GenerationOutcome::Failure(failure) => {
                assert_eq!(failure.reason, FailureReason::Configuration);
                assert_eq!(failure.classify(), FailureClassification::GenerationError);
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(primary.calls().is_empty());
        assert_eq!(openai.calls(), 0);
        assert!(progress.backoffs.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_is_one_then_two_seconds() {
        let primary = Arc::new(MockPrimary::new(|_, _, _| {
            Err(ProviderError::transient("timeout"))
        }));
        let progress = RecordingProgress::default();
        let uc = use_case(primary, &[]);

        let start = tokio::time::Instant::now();
        uc.execute_with_progress(request("a potter"), &progress)
            .await
            .unwrap();

        assert_eq!(
            *progress.backoffs.lock().unwrap(),
            vec![(2, Duration::from_secs(1)), (3, Duration::from_secs(2))]
        );
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(3) && elapsed < Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_params() {
        let primary = Arc::new(MockPrimary::new(|_, _, _| {
            Err(ProviderError::transient("timeout"))
        }));
        let progress = RecordingProgress::default();
        let uc = use_case(primary.clone(), &[]).with_params(
            GenerationParams::default()
                .with_max_attempts(2)
                .with_backoff_base(Duration::from_millis(100)),
        );

        uc.execute_with_progress(request("a potter"), &progress)
            .await
            .unwrap();

        assert_eq!(primary.calls().len(), 6);
        assert_eq!(
            *progress.backoffs.lock().unwrap(),
            vec![(2, Duration::from_millis(100))]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_before_first_call() {
        let primary = Arc::new(MockPrimary::new(|_, _, _| {
            Ok(ProviderResponse::direct(long_story()))
        }));
        let uc = use_case(primary.clone(), &[]);
        let token = CancellationToken::new();
        token.cancel();

        let err = uc
            .execute_cancellable(request("a potter"), &NoGenerationProgress, &token)
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateStoryError::Cancelled));
        assert!(primary.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_interrupts_backoff() {
        let primary = Arc::new(MockPrimary::new(|_, _, _| {
            Err(ProviderError::transient("timeout"))
        }));
        let uc = use_case(primary.clone(), &[]);
        let token = CancellationToken::new();

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            canceller.cancel();
        });

        let err = uc
            .execute_cancellable(request("a potter"), &NoGenerationProgress, &token)
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateStoryError::Cancelled));
        assert_eq!(primary.calls().len(), 3);
    }
}
