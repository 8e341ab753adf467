// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed bilingual message catalog.
//!
//! Every system message the bot sends outside of generated content
//! lives here, keyed by [`Notice`] and localized per [`Language`].
//! Keeping them in one table keeps wording changes reviewable.

use bondhu_core::{Intent, Language};

/// A predefined system message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Welcome,
    Help,
    CodeUsage,
    AppUsage,
    WebUsage,
    AskUsage,
    AiUsage,
    MlUsage,
    MobileUsage,
    DatabaseUsage,
    ApiUsage,
    LanguageInfo,
    Status,
    RateLimit,
    Error,
    Identity,
}

/// Looks up a notice in the requested language.
pub fn text(notice: Notice, language: Language) -> &'static str {
    use Language::{Bengali, English};
    match (notice, language) {
        (Notice::Welcome, English) => WELCOME_EN,
        (Notice::Welcome, Bengali) => WELCOME_BN,
        (Notice::Help, English) => HELP_EN,
        (Notice::Help, Bengali) => HELP_BN,
        (Notice::CodeUsage, English) => {
            "📝 Usage: `/code <your code request>`\n\nExample: `/code create a python function to sort a list`"
        }
        (Notice::CodeUsage, Bengali) => {
            "📝 ব্যবহার: `/code <আপনার কোড অনুরোধ>`\n\nউদাহরণ: `/code পাইথনে লিস্ট সর্ট করার ফাংশন বানাও`"
        }
        (Notice::AppUsage, English) => {
            "📱 Usage: `/app <your app idea>`\n\nExample: `/app create a todo list app in React Native`"
        }
        (Notice::AppUsage, Bengali) => {
            "📱 ব্যবহার: `/app <আপনার অ্যাপ আইডিয়া>`\n\nউদাহরণ: `/app রিঅ্যাক্ট নেটিভে টুডু লিস্ট অ্যাপ বানাও`"
        }
        (Notice::WebUsage, English) => {
            "🌐 Usage: `/web <your website idea>`\n\nExample: `/web create a responsive portfolio website`"
        }
        (Notice::WebUsage, Bengali) => {
            "🌐 ব্যবহার: `/web <আপনার ওয়েবসাইট আইডিয়া>`\n\nউদাহরণ: `/web রেসপন্সিভ পোর্টফোলিও ওয়েবসাইট বানাও`"
        }
        (Notice::AskUsage, English) => {
            "❓ Usage: `/ask <your question>`\n\nExample: `/ask what is artificial intelligence?`"
        }
        (Notice::AskUsage, Bengali) => {
            "❓ ব্যবহার: `/ask <আপনার প্রশ্ন>`\n\nউদাহরণ: `/ask কৃত্রিম বুদ্ধিমত্তা কি?`"
        }
        (Notice::AiUsage, English) => {
            "🤖 Usage: `/ai <your AI/ML project>`\n\nExample: `/ai create an image classification model`"
        }
        (Notice::AiUsage, Bengali) => {
            "🤖 ব্যবহার: `/ai <আপনার AI/ML প্রোজেক্ট>`\n\nউদাহরণ: `/ai ইমেজ ক্লাসিফিকেশন মডেল তৈরি করুন`"
        }
        (Notice::MlUsage, English) => {
            "🧠 Usage: `/ml <your machine learning project>`\n\nExample: `/ml text sentiment analysis`"
        }
        (Notice::MlUsage, Bengali) => {
            "🧠 ব্যবহার: `/ml <আপনার মেশিন লার্নিং প্রোজেক্ট>`\n\nউদাহরণ: `/ml টেক্সট সেন্টিমেন্ট এনালাইসিস`"
        }
        (Notice::MobileUsage, English) => {
            "📱 Usage: `/mobile <your mobile app idea>`\n\nExample: `/mobile e-commerce app in Flutter`"
        }
        (Notice::MobileUsage, Bengali) => {
            "📱 ব্যবহার: `/mobile <আপনার মোবাইল অ্যাপ আইডিয়া>`\n\nউদাহরণ: `/mobile ফ্লাটারে ই-কমার্স অ্যাপ`"
        }
        (Notice::DatabaseUsage, English) => {
            "🗄️ Usage: `/db <your database project>`\n\nExample: `/db user management system`"
        }
        (Notice::DatabaseUsage, Bengali) => {
            "🗄️ ব্যবহার: `/db <আপনার ডাটাবেস প্রোজেক্ট>`\n\nউদাহরণ: `/db ইউজার ম্যানেজমেন্ট সিস্টেম`"
        }
        (Notice::ApiUsage, English) => {
            "🔗 Usage: `/api <your API project>`\n\nExample: `/api RESTful API for blog`"
        }
        (Notice::ApiUsage, Bengali) => {
            "🔗 ব্যবহার: `/api <আপনার API প্রোজেক্ট>`\n\nউদাহরণ: `/api RESTful API for blog`"
        }
        (Notice::LanguageInfo, English) => LANGUAGE_INFO_EN,
        (Notice::LanguageInfo, Bengali) => LANGUAGE_INFO_BN,
        (Notice::Status, English) => STATUS_EN,
        (Notice::Status, Bengali) => STATUS_BN,
        (Notice::RateLimit, English) => {
            "⏰ You're sending requests too quickly. Please wait a moment and try again."
        }
        (Notice::RateLimit, Bengali) => {
            "⏰ আপনি খুব তাড়াতাড়ি অনুরোধ পাঠাচ্ছেন। একটু অপেক্ষা করে আবার চেষ্টা করুন।"
        }
        (Notice::Error, English) => {
            "❌ Sorry, there was an error processing your request. Please try again later."
        }
        (Notice::Error, Bengali) => {
            "❌ দুঃখিত, আপনার অনুরোধ প্রক্রিয়া করতে ত্রুটি হয়েছে। পরে আবার চেষ্টা করুন।"
        }
        (Notice::Identity, English) => "I was created by Rafsan Maruf.",
        (Notice::Identity, Bengali) => "আমাকে Rafsan Maruf তৈরি করেছেন।",
    }
}

/// The empty-argument usage notice for a command-derived intent.
pub fn usage(intent: Intent, language: Language) -> &'static str {
    let notice = match intent {
        Intent::App => Notice::AppUsage,
        Intent::Web => Notice::WebUsage,
        Intent::Ai => Notice::AiUsage,
        Intent::Ml => Notice::MlUsage,
        Intent::Mobile => Notice::MobileUsage,
        Intent::Database => Notice::DatabaseUsage,
        Intent::Api => Notice::ApiUsage,
        Intent::Ask => Notice::AskUsage,
        Intent::Code | Intent::General => Notice::CodeUsage,
    };
    text(notice, language)
}

const WELCOME_EN: &str = "🤖 *Welcome to Multilingual AI Bot!*

I'm your advanced AI assistant powered by Google Gemini! I can help you with:

🔧 *Code Generation*
• Any programming language
• App development
• Website creation
• Problem solving

💡 *Question Answering*
• Technical questions
• General knowledge
• Educational content
• Programming help

🌐 *Languages Supported*
• English
• বাংলা (Bengali)

*Commands:*
/code - Generate code
/app - Create app code
/web - Create website code
/ask - Ask any question
/help - Show this help
/lang - Language info
/status - Bot status

Just type your question or request in any language!";

const WELCOME_BN: &str = "🤖 *বহুভাষিক AI বট এ স্বাগতম!*

আমি Google Gemini দ্বারা চালিত আপনার উন্নত AI সহায়ক! আমি আপনাকে সাহায্য করতে পারি:

🔧 *কোড তৈরি*
• যেকোনো প্রোগ্রামিং ভাষা
• অ্যাপ ডেভেলপমেন্ট
• ওয়েবসাইট তৈরি
• সমস্যা সমাধান

💡 *প্রশ্নের উত্তর*
• প্রযুক্তিগত প্রশ্ন
• সাধারণ জ্ঞান
• শিক্ষামূলক বিষয়
• প্রোগ্রামিং সাহায্য

🌐 *সমর্থিত ভাষা*
• English
• বাংলা

*কমান্ড সমূহ:*
/code - কোড তৈরি করুন
/app - অ্যাপ কোড তৈরি করুন
/web - ওয়েবসাইট কোড তৈরি করুন
/ask - যেকোনো প্রশ্ন করুন
/help - এই সাহায্য দেখুন
/lang - ভাষার তথ্য
/status - বট স্ট্যাটাস

যেকোনো ভাষায় আপনার প্রশ্ন বা অনুরোধ টাইপ করুন!";

const HELP_EN: &str = "🔧 *Bot Commands & Usage*

*Code Generation:*
• `/code <description>` - Generate any code
• `/app <app idea>` - Create mobile/desktop app code
• `/web <website idea>` - Create website code

*Question Answering:*
• `/ask <question>` - Ask any question
• Just type your question directly

*Other Commands:*
• `/lang` - Language information
• `/status` - Check bot status
• `/help` - Show this help

*Examples:*
• `/code create a calculator in python`
• `/app todo list app in react native`
• `/web responsive portfolio website`
• `/ask what is machine learning?`

*Tips:*
• Be specific in your requests
• You can mix Bengali and English
• The bot understands context
• Free tier limits apply";

const HELP_BN: &str = "🔧 *বট কমান্ড ও ব্যবহার*

*কোড তৈরি:*
• `/code <বর্ণনা>` - যেকোনো কোড তৈরি করুন
• `/app <অ্যাপ আইডিয়া>` - মোবাইল/ডেস্কটপ অ্যাপ কোড
• `/web <ওয়েবসাইট আইডিয়া>` - ওয়েবসাইট কোড তৈরি

*প্রশ্নের উত্তর:*
• `/ask <প্রশ্ন>` - যেকোনো প্রশ্ন করুন
• সরাসরি প্রশ্ন টাইপ করুন

*অন্যান্য কমান্ড:*
• `/lang` - ভাষার তথ্য
• `/status` - বট স্ট্যাটাস দেখুন
• `/help` - এই সাহায্য দেখুন

*উদাহরণ:*
• `/code পাইথনে ক্যালকুলেটর বানাও`
• `/app রিঅ্যাক্ট নেটিভে টুডু লিস্ট অ্যাপ`
• `/web রেসপন্সিভ পোর্টফোলিও ওয়েবসাইট`
• `/ask মেশিন লার্নিং কি?`

*টিপস:*
• আপনার অনুরোধে সুনির্দিষ্ট হন
• বাংলা ও ইংরেজি মিশিয়ে লিখতে পারেন
• বট প্রসঙ্গ বুঝতে পারে
• ফ্রি টিয়ার সীমা প্রযোজ্য";

const LANGUAGE_INFO_EN: &str = "🌐 *Language Support*

*Supported Languages:*
• English
• বাংলা (Bengali)

*Features:*
• Automatic language detection
• Mixed language support
• Context-aware responses
• Cultural adaptation

*Tips:*
• You can mix Bengali and English in the same message
• The bot will respond in the appropriate language
• Technical terms are explained in both languages";

const LANGUAGE_INFO_BN: &str = "🌐 *ভাষা সাপোর্ট*

*সমর্থিত ভাষা:*
• English
• বাংলা

*বৈশিষ্ট্য:*
• স্বয়ংক্রিয় ভাষা শনাক্তকরণ
• মিশ্র ভাষা সাপোর্ট
• প্রসঙ্গ-সচেতন উত্তর
• সাংস্কৃতিক অভিযোজন

*টিপস:*
• একই বার্তায় বাংলা ও ইংরেজি মিশিয়ে লিখতে পারেন
• বট উপযুক্ত ভাষায় উত্তর দেবে
• প্রযুক্তিগত শব্দ দুই ভাষায় ব্যাখ্যা করা হয়";

const STATUS_EN: &str = "✅ *Bot Status*

🤖 *AI Model:* Google Gemini 2.5 Flash
🌐 *Languages:* English, Bengali
🔧 *Features:* Code Generation, Q&A, App Development
⚡ *Status:* Online and Ready
🆓 *Tier:* Free (Rate Limited)
🔒 *Security:* End-to-end processing
👨‍💻 *Created by:* Rafsan Maruf

*Capabilities:*
• Multi-language code generation
• Advanced question answering
• App and website development
• Technical problem solving";

const STATUS_BN: &str = "✅ *বট স্ট্যাটাস*

🤖 *AI মডেল:* Google Gemini 2.5 Flash
🌐 *ভাষা:* ইংরেজি, বাংলা
🔧 *বৈশিষ্ট্য:* কোড তৈরি, প্রশ্নোত্তর, অ্যাপ ডেভেলপমেন্ট
⚡ *স্ট্যাটাস:* অনলাইন এবং প্রস্তুত
🆓 *টিয়ার:* ফ্রি (রেট লিমিটেড)
🔒 *নিরাপত্তা:* এন্ড-টু-এন্ড প্রসেসিং
👨‍💻 *তৈরি করেছেন:* Rafsan Maruf

*সক্ষমতা:*
• বহুভাষিক কোড তৈরি
• উন্নত প্রশ্নোত্তর
• অ্যাপ এবং ওয়েবসাইট ডেভেলপমেন্ট
• প্রযুক্তিগত সমস্যা সমাধান";
