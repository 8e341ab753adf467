// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build-request classification for free-form messages.
//!
//! Decides whether a message is asking the bot to produce code (a
//! build request) or asking an open-domain question. Signals are
//! evaluated in strict precedence order:
//!
//! 1. creator-identity phrases (checked by the router, never build)
//! 2. programming-syntax fragments (build)
//! 3. bilingual domain vocabulary (build)
//! 4. concept-question phrases (not build, unless a strong
//!    code-specific noun also appears)
//! 5. default: not build
//!
//! Case policy is uniform per language: English tables match against
//! the case-folded text, Bengali tables match the raw text (Bengali
//! has no case). Single-word English terms match on word boundaries
//! so that e.g. "ai" never fires inside "explain"; multi-word phrases
//! and all Bengali terms match as substrings.

/// Syntax fragments that strongly indicate a code request.
const SYNTAX_FRAGMENTS: &[&str] = &[
    "def ", "function ", "class ", "import ", "from ", "return ",
    "if(", "else:", "for(", "while(", "try:", "except:", "with ",
    "{", "}", "()", "[]", "==", "!=", "&&", "||", "//", "/**",
    "<html>", "<div>", "<script>", "public class", "private ",
    "const ", "let ", "var ", "async ", "await ", "promise",
];

/// English programming/technology vocabulary.
const KEYWORDS_EN: &[&str] = &[
    "code", "program", "function", "class", "variable", "algorithm",
    "python", "javascript", "java", "html", "css", "react", "node",
    "app", "website", "database", "api", "framework", "library",
    "build", "develop", "write", "generate", "make",
    "flutter", "android", "ios", "machine learning", "ai", "ml",
    "django", "flask", "fastapi", "express", "vue", "angular",
    "mongodb", "postgresql", "mysql", "firebase", "aws", "docker",
    "kubernetes", "microservice", "blockchain", "web3", "smart contract",
];

/// Bengali programming/technology vocabulary.
const KEYWORDS_BN: &[&str] = &[
    "কোড", "প্রোগ্রাম", "ফাংশন", "ক্লাস", "ভেরিয়েবল", "অ্যালগরিদম",
    "পাইথন", "জাভাস্ক্রিপ্ট", "জাভা", "এইচটিএমএল", "সিএসএস",
    "অ্যাপ", "ওয়েবসাইট", "ডাটাবেস", "এপিআই", "ফ্রেমওয়ার্ক",
    "বানাও", "লিখ", "করো", "বানানো", "লেখা", "ডেভেলপ",
    "ফ্লাটার", "অ্যান্ড্রয়েড", "আইওএস", "মেশিন লার্নিং", "এআই",
    "জ্যাঙ্গো", "ফ্লাস্ক", "এক্সপ্রেস", "ভিউ", "অ্যাঙ্গুলার",
    "মঙ্গোডিবি", "পোস্টগ্রেস", "মাইএসকিউএল", "ফায়ারবেস",
    "ডকার", "কুবারনেটিস", "মাইক্রোসার্ভিস", "ব্লকচেইন",
];

/// Phrases asking who made the bot. Answered with a fixed identity
/// string and never routed anywhere else.
const CREATOR_PHRASES_EN: &[&str] = &[
    "who created", "who developed", "who made", "who built",
    "created by", "developed by",
];

const CREATOR_PHRASES_BN: &[&str] = &[
    "কে তৈরি", "কে বানিয়েছে", "কে ডেভেলপ", "কে বানায়",
    "তৈরি করেছে", "তৈরি করছে",
];

/// Concept-question phrases that route to open-domain answering.
const CONCEPT_PHRASES_EN: &[&str] = &[
    "what is", "explain", "meaning", "definition", "why",
    "how does", "difference", "compare",
];

const CONCEPT_PHRASES_BN: &[&str] = &[
    "কি", "কাকে বলে", "বুঝিয়ে", "সংজ্ঞা", "কেন",
    "কিভাবে কাজ করে", "পার্থক্য", "তুলনা",
];

/// Code-specific nouns that rescue a concept question back into a
/// build request ("explain what is a function and write code for it").
const STRONG_NOUNS_EN: &[&str] = &["function", "algorithm", "program", "script"];

const STRONG_NOUNS_BN: &[&str] = &["ফাংশন", "অ্যালগরিদম"];

/// Whether the message asks who created the bot.
pub fn is_creator_question(text: &str) -> bool {
    let lower = text.to_lowercase();
    CREATOR_PHRASES_EN.iter().any(|p| lower.contains(p))
        || CREATOR_PHRASES_BN.iter().any(|p| text.contains(p))
}

/// Whether the message asks the bot to produce code.
///
/// Only called for free-form text; command-derived intents carry
/// their own routing and never reach the classifier.
pub fn is_build_request(text: &str) -> bool {
    let lower = text.to_lowercase();

    if SYNTAX_FRAGMENTS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    if KEYWORDS_EN.iter().any(|k| matches_english(&lower, k))
        || KEYWORDS_BN.iter().any(|k| text.contains(k))
    {
        return true;
    }

    let is_concept_question = CONCEPT_PHRASES_EN.iter().any(|p| matches_english(&lower, p))
        || CONCEPT_PHRASES_BN.iter().any(|p| text.contains(p));

    if is_concept_question {
        return STRONG_NOUNS_EN.iter().any(|n| matches_english(&lower, n))
            || STRONG_NOUNS_BN.iter().any(|n| text.contains(n));
    }

    false
}

/// Matches an English term against case-folded text.
///
/// Single words match on word boundaries; multi-word phrases match as
/// substrings.
fn matches_english(lower: &str, term: &str) -> bool {
    if term.contains(' ') {
        lower.contains(term)
    } else {
        lower
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == term)
    }
}
