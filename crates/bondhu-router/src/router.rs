// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request routing: admission, classification, and prompt assembly.
//!
//! Order of evaluation for free-form text:
//! 1. creator-identity questions answer immediately and never touch
//!    the limiter (identity answers are free)
//! 2. admission control; denied requests get a localized notice and
//!    are never classified
//! 3. language detection from the message text
//! 4. intent classification and prompt template selection
//!
//! Commands skip classification: the command names the intent. An
//! empty command argument is a usage error, reported before the
//! limiter so it never consumes a quota slot.

use std::sync::Arc;
use std::time::Duration;

use bondhu_core::{Intent, Language};
use bondhu_limiter::SlidingWindowLimiter;
use tracing::debug;

use crate::intent;
use crate::language;
use crate::messages::{self, Notice};
use crate::prompts;

/// An inbound message with its routing context.
#[derive(Debug, Clone, Copy)]
pub struct InboundRequest<'a> {
    /// Stable per-user key for admission control.
    pub user_key: &'a str,
    /// Message text, or the command argument for command routes.
    pub text: &'a str,
    /// IETF locale tag declared by the client, if any. Used only for
    /// notices sent before the text itself can be classified.
    pub declared_locale: Option<&'a str>,
}

/// A fully routed request, ready for the generation provider.
#[derive(Debug, Clone)]
pub struct RouterDecision {
    /// Language detected from the message text.
    pub language: Language,
    /// Classified or command-derived intent.
    pub intent: Intent,
    /// Instruction template plus the literal user text.
    pub enhanced_prompt: String,
}

/// Outcome of routing an inbound message.
#[derive(Debug, Clone)]
pub enum RouteOutcome {
    /// Creator-identity question; reply directly, quota untouched.
    Identity { reply: &'static str },
    /// Command called with no argument; reply with usage, quota untouched.
    Usage { notice: &'static str },
    /// Admission denied; reply with the rate-limit notice.
    Denied { notice: &'static str },
    /// Admitted and classified.
    Accepted(RouterDecision),
}

/// Routes inbound messages through admission control and
/// classification to a provider-ready prompt.
pub struct RequestRouter {
    limiter: Arc<SlidingWindowLimiter>,
}

impl RequestRouter {
    pub fn new(limiter: Arc<SlidingWindowLimiter>) -> Self {
        Self { limiter }
    }

    /// Routes a free-form text message.
    pub fn route_text(&self, request: &InboundRequest<'_>, now: Duration) -> RouteOutcome {
        if intent::is_creator_question(request.text) {
            let lang = language::detect_from_text(request.text);
            debug!(user = request.user_key, "creator-identity question");
            return RouteOutcome::Identity {
                reply: messages::text(Notice::Identity, lang),
            };
        }

        if !self.limiter.check(request.user_key, now) {
            let lang = language::detect_from_locale(request.declared_locale);
            return RouteOutcome::Denied {
                notice: messages::text(Notice::RateLimit, lang),
            };
        }

        let lang = language::detect_from_text(request.text);
        let intent = if intent::is_build_request(request.text) {
            Intent::General
        } else {
            Intent::Ask
        };
        debug!(
            user = request.user_key,
            language = %lang,
            intent = %intent,
            "classified free-form message"
        );

        RouteOutcome::Accepted(RouterDecision {
            language: lang,
            intent,
            enhanced_prompt: prompts::enhance(intent, request.text, lang),
        })
    }

    /// Routes a command invocation; `request.text` is the argument
    /// after the command name.
    pub fn route_command(
        &self,
        command_intent: Intent,
        request: &InboundRequest<'_>,
        now: Duration,
    ) -> RouteOutcome {
        let argument = request.text.trim();
        if argument.is_empty() {
            let lang = language::detect_from_locale(request.declared_locale);
            return RouteOutcome::Usage {
                notice: messages::usage(command_intent, lang),
            };
        }

        if !self.limiter.check(request.user_key, now) {
            let lang = language::detect_from_locale(request.declared_locale);
            return RouteOutcome::Denied {
                notice: messages::text(Notice::RateLimit, lang),
            };
        }

        let lang = language::detect_from_text(argument);
        debug!(
            user = request.user_key,
            language = %lang,
            intent = %command_intent,
            "routed command"
        );

        RouteOutcome::Accepted(RouterDecision {
            language: lang,
            intent: command_intent,
            enhanced_prompt: prompts::enhance(command_intent, argument, lang),
        })
    }

    /// [`route_text`](Self::route_text) against the limiter's own clock.
    pub fn route_text_now(&self, request: &InboundRequest<'_>) -> RouteOutcome {
        self.route_text(request, self.limiter.clock())
    }

    /// [`route_command`](Self::route_command) against the limiter's own clock.
    pub fn route_command_now(
        &self,
        command_intent: Intent,
        request: &InboundRequest<'_>,
    ) -> RouteOutcome {
        self.route_command(command_intent, request, self.limiter.clock())
    }

    /// The limiter shared with this router.
    pub fn limiter(&self) -> &Arc<SlidingWindowLimiter> {
        &self.limiter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn router(max: usize, window_secs: u64) -> RequestRouter {
        let limiter = SlidingWindowLimiter::new(max, secs(window_secs)).unwrap();
        RequestRouter::new(Arc::new(limiter))
    }

    fn request<'a>(text: &'a str) -> InboundRequest<'a> {
        InboundRequest {
            user_key: "42",
            text,
            declared_locale: Some("en-US"),
        }
    }

    #[test]
    fn free_text_build_request_routes_to_general() {
        let r = router(10, 60);
        match r.route_text(&request("build me a python calculator"), secs(0)) {
            RouteOutcome::Accepted(decision) => {
                assert_eq!(decision.intent, Intent::General);
                assert_eq!(decision.language, Language::English);
                assert!(decision.enhanced_prompt.contains("User Request:"));
            }
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[test]
    fn free_text_question_routes_to_ask_untouched() {
        let r = router(10, 60);
        match r.route_text(&request("explain what is recursion"), secs(0)) {
            RouteOutcome::Accepted(decision) => {
                assert_eq!(decision.intent, Intent::Ask);
                assert_eq!(decision.enhanced_prompt, "explain what is recursion");
            }
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[test]
    fn strong_noun_rescues_concept_question() {
        let r = router(10, 60);
        match r.route_text(
            &request("explain what is a function and write code for it"),
            secs(0),
        ) {
            RouteOutcome::Accepted(decision) => assert_eq!(decision.intent, Intent::General),
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[test]
    fn creator_question_bypasses_exhausted_limiter() {
        let r = router(1, 60);
        assert!(r.limiter().check("42", secs(0)));
        // Quota is gone, but identity answers are free.
        match r.route_text(&request("who created you?"), secs(1)) {
            RouteOutcome::Identity { reply } => {
                assert_eq!(reply, "I was created by Rafsan Maruf.");
            }
            other => panic!("expected Identity, got {other:?}"),
        }
    }

    #[test]
    fn creator_answer_localized_by_message_script() {
        let r = router(10, 60);
        match r.route_text(&request("তোমাকে কে বানিয়েছে"), secs(0)) {
            RouteOutcome::Identity { reply } => {
                assert_eq!(reply, "আমাকে Rafsan Maruf তৈরি করেছেন।");
            }
            other => panic!("expected Identity, got {other:?}"),
        }
    }

    #[test]
    fn denied_request_gets_localized_notice_and_skips_classification() {
        let r = router(1, 60);
        assert!(matches!(
            r.route_text(&request("first message"), secs(0)),
            RouteOutcome::Accepted(_)
        ));

        let bn = InboundRequest {
            user_key: "42",
            text: "build an app",
            declared_locale: Some("bn"),
        };
        match r.route_text(&bn, secs(1)) {
            RouteOutcome::Denied { notice } => {
                assert!(notice.starts_with("⏰ আপনি"));
            }
            other => panic!("expected Denied, got {other:?}"),
        }
    }

    #[test]
    fn empty_command_argument_is_usage_error_without_quota_cost() {
        let r = router(1, 60);
        match r.route_command(Intent::Code, &request("   "), secs(0)) {
            RouteOutcome::Usage { notice } => assert!(notice.contains("/code")),
            other => panic!("expected Usage, got {other:?}"),
        }
        // The usage error above must not have consumed the only slot.
        assert!(matches!(
            r.route_command(Intent::Code, &request("sort a list"), secs(1)),
            RouteOutcome::Accepted(_)
        ));
    }

    #[test]
    fn command_intent_overrides_classifier() {
        let r = router(10, 60);
        // "what is gravity" would classify as Ask, but /code says build.
        match r.route_command(Intent::Code, &request("what is gravity"), secs(0)) {
            RouteOutcome::Accepted(decision) => {
                assert_eq!(decision.intent, Intent::Code);
                assert!(decision.enhanced_prompt.starts_with("Write a complete"));
            }
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[test]
    fn command_language_follows_argument_not_locale() {
        let r = router(10, 60);
        let req = InboundRequest {
            user_key: "42",
            text: "পাইথনে ক্যালকুলেটর বানাও",
            declared_locale: Some("en-US"),
        };
        match r.route_command(Intent::Code, &req, secs(0)) {
            RouteOutcome::Accepted(decision) => {
                assert_eq!(decision.language, Language::Bengali);
                assert!(decision.enhanced_prompt.contains("কোড লিখুন"));
            }
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[test]
    fn ask_command_passes_question_through() {
        let r = router(10, 60);
        match r.route_command(Intent::Ask, &request("what is machine learning?"), secs(0)) {
            RouteOutcome::Accepted(decision) => {
                assert_eq!(decision.intent, Intent::Ask);
                assert_eq!(decision.enhanced_prompt, "what is machine learning?");
            }
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[test]
    fn commands_and_text_share_one_quota() {
        let r = router(2, 60);
        assert!(matches!(
            r.route_command(Intent::Web, &request("a portfolio site"), secs(0)),
            RouteOutcome::Accepted(_)
        ));
        assert!(matches!(
            r.route_text(&request("now explain css"), secs(1)),
            RouteOutcome::Accepted(_)
        ));
        assert!(matches!(
            r.route_text(&request("one more thing"), secs(2)),
            RouteOutcome::Denied { .. }
        ));
    }
}
