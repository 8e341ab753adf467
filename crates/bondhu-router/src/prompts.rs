// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instruction templates for code-generation prompts.
//!
//! Each build intent carries a fixed instruction block per language.
//! The final prompt is the instruction followed by the literal user
//! text; question intents pass the user text through untouched, since
//! the provider applies its own question-answering system instruction.

use bondhu_core::{Intent, Language};

/// Builds the prompt sent to the generation provider.
pub fn enhance(intent: Intent, text: &str, language: Language) -> String {
    if !intent.is_build() {
        return text.to_string();
    }
    format!("{}\n\nUser Request: {}", instruction(intent, language), text)
}

/// The fixed instruction block for a build intent.
pub fn instruction(intent: Intent, language: Language) -> &'static str {
    match language {
        Language::English => instruction_en(intent),
        Language::Bengali => instruction_bn(intent),
    }
}

fn instruction_en(intent: Intent) -> &'static str {
    match intent {
        Intent::Code => {
            "Write a complete and functional code that is:\n\
             1. Well-formatted and clean\n\
             2. Includes detailed comments\n\
             3. Has proper error handling\n\
             4. Follows best programming practices\n\
             5. Ready to test and run"
        }
        Intent::App => {
            "Create a complete mobile/desktop application code that includes:\n\
             1. UI/UX design\n\
             2. Required features\n\
             3. Data handling\n\
             4. Navigation\n\
             5. Modern development practices"
        }
        Intent::Web => {
            "Create a complete website code that includes:\n\
             1. HTML, CSS, JavaScript\n\
             2. Responsive design\n\
             3. Modern web standards\n\
             4. Interactive features\n\
             5. SEO-friendly structure"
        }
        Intent::Ai => {
            "Create a complete AI/ML project code that includes:\n\
             1. Data preprocessing pipelines\n\
             2. Model architecture design\n\
             3. Training and validation loops\n\
             4. Evaluation metrics\n\
             5. Inference API/interface"
        }
        Intent::Ml => {
            "Create a machine learning project that includes:\n\
             1. Exploratory data analysis\n\
             2. Feature engineering\n\
             3. Model selection and training\n\
             4. Hyperparameter optimization\n\
             5. Deployment-ready code"
        }
        Intent::Mobile => {
            "Create a mobile application code that includes:\n\
             1. Cross-platform compatibility\n\
             2. State management\n\
             3. API integration\n\
             4. Local data storage\n\
             5. Push notifications"
        }
        Intent::Database => {
            "Create a database system that includes:\n\
             1. Schema design\n\
             2. Data migration scripts\n\
             3. Indexing strategy\n\
             4. Query optimization\n\
             5. Backup and recovery"
        }
        Intent::Api => {
            "Create a RESTful API that includes:\n\
             1. Endpoint design\n\
             2. Authentication system\n\
             3. Rate limiting\n\
             4. API documentation\n\
             5. Testing framework"
        }
        Intent::General | Intent::Ask => {
            "Provide a high-quality code solution that meets the user's requirements."
        }
    }
}

fn instruction_bn(intent: Intent) -> &'static str {
    match intent {
        Intent::Code => {
            "একটি সম্পূর্ণ এবং কার্যকর কোড লিখুন যা:\n\
             1. সুন্দরভাবে ফরম্যাট করা\n\
             2. বিস্তারিত মন্তব্য সহ\n\
             3. ত্রুটি হ্যান্ডলিং সহ\n\
             4. সেরা প্রোগ্রামিং অনুশীলন অনুসরণ করে\n\
             5. পরীক্ষাযোগ্য এবং রান করার জন্য প্রস্তুত"
        }
        Intent::App => {
            "একটি সম্পূর্ণ মোবাইল/ডেস্কটপ অ্যাপ্লিকেশনের কোড তৈরি করুন যাতে রয়েছে:\n\
             1. UI/UX ডিজাইন\n\
             2. প্রয়োজনীয় ফিচার\n\
             3. ডাটা হ্যান্ডলিং\n\
             4. নেভিগেশন\n\
             5. আধুনিক ডেভেলপমেন্ট প্র্যাকটিস"
        }
        Intent::Web => {
            "একটি সম্পূর্ণ ওয়েবসাইটের কোড তৈরি করুন যাতে রয়েছে:\n\
             1. HTML, CSS, JavaScript\n\
             2. রেসপন্সিভ ডিজাইন\n\
             3. আধুনিক ওয়েব স্ট্যান্ডার্ড\n\
             4. ইন্টারঅ্যাক্টিভ ফিচার\n\
             5. SEO ফ্রেন্ডলি স্ট্রাকচার"
        }
        Intent::Ai => {
            "একটি সম্পূর্ণ AI/ML প্রোজেক্ট কোড তৈরি করুন যাতে রয়েছে:\n\
             1. ডাটা প্রিপ্রসেসিং\n\
             2. মডেল আর্কিটেকচার\n\
             3. ট্রেনিং কোড\n\
             4. ইভালুয়েশন মেট্রিক্স\n\
             5. প্রেডিকশন ইন্টারফেস"
        }
        Intent::Ml => {
            "একটি মেশিন লার্নিং প্রোজেক্ট তৈরি করুন যাতে রয়েছে:\n\
             1. ডাটা এনালাইসিস\n\
             2. ফিচার ইঞ্জিনিয়ারিং\n\
             3. মডেল সিলেকশন\n\
             4. হাইপারপ্যারামিটার টিউনিং\n\
             5. ডিপ্লয়মেন্ট কোড"
        }
        Intent::Mobile => {
            "একটি মোবাইল অ্যাপ কোড তৈরি করুন যাতে রয়েছে:\n\
             1. ক্রস-প্ল্যাটফর্ম কম্প্যাটিবিলিটি\n\
             2. স্টেট ম্যানেজমেন্ট\n\
             3. API ইন্টিগ্রেশন\n\
             4. লোকাল ডাটা স্টোরেজ\n\
             5. পুশ নোটিফিকেশন"
        }
        Intent::Database => {
            "একটি ডাটাবেস সিস্টেম তৈরি করুন যাতে রয়েছে:\n\
             1. স্কিমা ডিজাইন\n\
             2. ডাটা মাইগ্রেশন\n\
             3. ইনডেক্সিং স্ট্র্যাটেজি\n\
             4. কোয়েরি অপ্টিমাইজেশন\n\
             5. ব্যাকআপ সিস্টেম"
        }
        Intent::Api => {
            "একটি RESTful API তৈরি করুন যাতে রয়েছে:\n\
             1. এন্ডপয়েন্ট ডিজাইন\n\
             2. অথেনটিকেশন সিস্টেম\n\
             3. রেট লিমিটিং\n\
             4. API ডকুমেন্টেশন\n\
             5. টেস্টিং স্ট্র্যাটেজি"
        }
        Intent::General | Intent::Ask => {
            "একটি উচ্চমানের কোড সমাধান প্রদান করুন যা ব্যবহারকারীর প্রয়োজন পূরণ করে।"
        }
    }
}
