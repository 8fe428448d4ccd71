//! Static display strings per language. No logic beyond the lookup.

use crate::models::{Language, ProficiencyLevel};

#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub goal_label: &'static str,
    pub goal_placeholder: &'static str,
    pub deadline_label: &'static str,
    pub level_label: &'static str,
    pub availability_label: &'static str,
    pub generate_button: &'static str,
    pub generating_text: &'static str,
    pub steps_title: &'static str,
    pub university_module_tag: &'static str,
    pub partnered_academy_tag: &'static str,
    pub progress_title: &'static str,
    pub no_data: &'static str,
    pub chat_title: &'static str,
    pub chat_placeholder: &'static str,
    pub level_beginner: &'static str,
    pub level_intermediate: &'static str,
    pub level_advanced: &'static str,
}

impl Strings {
    pub fn level(&self, level: ProficiencyLevel) -> &'static str {
        match level {
            ProficiencyLevel::Beginner => self.level_beginner,
            ProficiencyLevel::Intermediate => self.level_intermediate,
            ProficiencyLevel::Advanced => self.level_advanced,
        }
    }
}

static EN: Strings = Strings {
    title: "MARI",
    subtitle: "AI agent for structured learning in Algeria",
    goal_label: "Learning Goal",
    goal_placeholder: "e.g., Master Full-stack Development, Learn USTHB Data Structures module",
    deadline_label: "Target Deadline",
    level_label: "Current Level",
    availability_label: "Availability (Hours/Week)",
    generate_button: "Generate Learning Path",
    generating_text: "Synthesizing local data...",
    steps_title: "Your Structured Timeline",
    university_module_tag: "Uni Module",
    partnered_academy_tag: "Academy",
    progress_title: "Your Progress",
    no_data: "Share your goal to start your journey.",
    chat_title: "Career Concierge",
    chat_placeholder: "Type a message...",
    level_beginner: "Beginner",
    level_intermediate: "Intermediate",
    level_advanced: "Advanced",
};

static AR: Strings = Strings {
    title: "ماري",
    subtitle: "وكيل الذكاء الاصطناعي للتعلم الممنهج في الجزائر",
    goal_label: "هدف التعلم",
    goal_placeholder: "مثال: إتقان تطوير الويب الشامل، دراسة وحدة هياكل البيانات في USTHB",
    deadline_label: "الموعد النهائي",
    level_label: "المستوى الحالي",
    availability_label: "التوفر (ساعة/أسبوع)",
    generate_button: "إنشاء مسار التعلم",
    generating_text: "جاري تجميع البيانات المحلية...",
    steps_title: "الجدول الزمني الممنهج",
    university_module_tag: "وحدة جامعية",
    partnered_academy_tag: "أكاديمية",
    progress_title: "تقدمك",
    no_data: "حدد هدفك لبدء رحلتك.",
    chat_title: "مستشار المسار",
    chat_placeholder: "اكتب رسالتك...",
    level_beginner: "مبتدئ",
    level_intermediate: "متوسط",
    level_advanced: "متقدم",
};

pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}
