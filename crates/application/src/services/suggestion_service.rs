//! Suggestion generation service
//!
//! Builds the persona prompt, dispatches to the selected provider backend,
//! and records successful searches for authenticated callers.

use std::{fmt, sync::Arc};

use domain::{
    entities::SearchRecord,
    value_objects::{Language, Persona},
};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{CompletionPrompt, CurrentUser, SearchHistoryPort, SuggestionPort},
};

/// One validated suggestion request
///
/// `place` and `weather_summary` may be empty; `provider` has already been
/// lower-cased and defaulted by the caller.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub query: String,
    pub place: String,
    pub weather_summary: String,
    pub persona: Persona,
    pub language: Language,
    pub provider: String,
}

/// Service generating activity suggestions through LLM backends
pub struct SuggestionService {
    backend: Arc<dyn SuggestionPort>,
    history: Arc<dyn SearchHistoryPort>,
}

impl fmt::Debug for SuggestionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionService").finish_non_exhaustive()
    }
}

impl SuggestionService {
    /// Create a new suggestion service
    pub fn new(backend: Arc<dyn SuggestionPort>, history: Arc<dyn SearchHistoryPort>) -> Self {
        Self { backend, history }
    }

    /// Generate suggestion text for a validated request
    ///
    /// One backend call, no retry. On success the search is recorded for
    /// the authenticated caller; history failures are logged and never fail
    /// the request.
    #[instrument(
        skip(self, request, user),
        fields(
            persona = %request.persona,
            lang = %request.language,
            provider = %request.provider,
            authenticated = user.is_some(),
        )
    )]
    pub async fn suggest(
        &self,
        request: SuggestionRequest,
        user: Option<&CurrentUser>,
    ) -> Result<String, ApplicationError> {
        let prompt = CompletionPrompt {
            system_instruction: persona_instruction(request.persona, request.language).to_string(),
            user_prompt: build_user_prompt(
                &request.place,
                &request.weather_summary,
                &request.query,
                request.language,
            ),
        };

        let text = self.backend.generate(&request.provider, prompt).await?;

        if let Some(user) = user {
            self.record_history(user, &request).await;
        }

        Ok(text)
    }

    async fn record_history(&self, user: &CurrentUser, request: &SuggestionRequest) {
        let record = SearchRecord::new(
            user.id.clone(),
            request.place.clone(),
            request.query.clone(),
            request.persona,
            request.language,
        );
        if let Err(error) = self.history.record_search(record).await {
            warn!(user = %user.id, %error, "Failed to record search history");
            return;
        }
        match self.history.increment_search_count(&user.id).await {
            Ok(total) => debug!(user = %user.id, total, "Search recorded"),
            Err(error) => warn!(user = %user.id, %error, "Failed to increment search count"),
        }
    }
}

/// System instruction for a persona in a given output language
const fn persona_instruction(persona: Persona, language: Language) -> &'static str {
    match (persona, language) {
        (Persona::Outings, Language::En) => {
            "You are a helpful assistant specializing in local activities and outings lasting 2-4 hours. Focus on practical, budget-friendly recommendations."
        },
        (Persona::Outings, Language::Ja) => {
            "あなたは2〜4時間の地元のアクティビティや外出に特化した親切なアシスタントです。実用的で予算に優しい推奨事項に焦点を当ててください。"
        },
        (Persona::Travel, Language::En) => {
            "You are a helpful assistant specializing in day trips and overnight travel. Include transport hints and booking considerations."
        },
        (Persona::Travel, Language::Ja) => {
            "あなたは日帰り旅行や宿泊旅行に特化した親切なアシスタントです。交通手段のヒントや予約の考慮事項を含めてください。"
        },
        (Persona::Fashion, Language::En) => {
            "You are a helpful assistant specializing in weather-appropriate fashion and outfit recommendations. Focus on layers, shoes, accessories, and weather protection."
        },
        (Persona::Fashion, Language::Ja) => {
            "あなたは天候に適したファッションと服装の推奨に特化した親切なアシスタントです。レイヤー、靴、アクセサリー、天候保護に焦点を当ててください。"
        },
    }
}

/// User prompt embedding place, weather summary, and query
fn build_user_prompt(
    place: &str,
    weather_summary: &str,
    query: &str,
    language: Language,
) -> String {
    match language {
        Language::Ja => format!(
            "場所: {place}\n天気の概要: {weather_summary}\nクエリ: {query}\n\n上記の情報に基づいて、正確に3つの提案を番号付きリストとして提供してください。各提案には以下を含めてください：\n1) 概要（1文）\n2) ステップ\n3) 持ち物\n4) 注意事項\n\n簡潔で実用的な内容にしてください。"
        ),
        Language::En => format!(
            "Place: {place}\nWeather summary: {weather_summary}\nQuery: {query}\n\nBased on the information above, provide exactly 3 suggestions as a numbered list. For each suggestion, include:\n1) Summary (one sentence)\n2) Steps\n3) Items to bring\n4) Cautions\n\nKeep it concise and practical."
        ),
    }
}
