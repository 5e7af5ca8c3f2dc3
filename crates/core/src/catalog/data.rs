//! Curated pain points compiled into the binary.
//!
//! Order matters: categories are shown in order of first appearance, and
//! points within a category keep the order listed here.

/// `(name, description, category, emoji)`
pub(super) const PAIN_POINTS: &[(&str, &str, &str, &str)] = &[
    // Productivity & Focus
    (
        "Procrastination",
        "Putting off important tasks until the last minute.",
        "Productivity & Focus",
        "⏳",
    ),
    (
        "Digital Distraction",
        "Losing hours to social media, notifications and endless scrolling.",
        "Productivity & Focus",
        "📱",
    ),
    (
        "Disorganization",
        "Struggling to keep track of tasks, files and commitments.",
        "Productivity & Focus",
        "🗂️",
    ),
    (
        "Meeting Overload",
        "Calendars so full of meetings there is no time left for real work.",
        "Productivity & Focus",
        "📅",
    ),
    (
        "Inbox Overwhelm",
        "Hundreds of unread emails and no system for dealing with them.",
        "Productivity & Focus",
        "📧",
    ),
    // Health & Fitness
    (
        "Weight Loss",
        "Trying to lose weight and keep it off without losing motivation.",
        "Health & Fitness",
        "⚖️",
    ),
    (
        "Poor Sleep",
        "Trouble falling asleep, staying asleep or waking up rested.",
        "Health & Fitness",
        "😴",
    ),
    (
        "Lack of Exercise",
        "Knowing you should move more but never finding the time or drive.",
        "Health & Fitness",
        "🏃",
    ),
    (
        "Unhealthy Eating",
        "Relying on junk food and takeout because cooking feels like a chore.",
        "Health & Fitness",
        "🍔",
    ),
    (
        "Back Pain",
        "Aches from long hours at a desk and bad posture.",
        "Health & Fitness",
        "🪑",
    ),
    // Personal Finance
    (
        "Financial Stress",
        "Constant worry about money, bills and making ends meet.",
        "Personal Finance",
        "💸",
    ),
    (
        "Debt Management",
        "Juggling credit cards, loans and interest with no clear payoff plan.",
        "Personal Finance",
        "💳",
    ),
    (
        "Budgeting",
        "Not knowing where the money goes at the end of each month.",
        "Personal Finance",
        "📊",
    ),
    (
        "Saving for Retirement",
        "Feeling behind on long-term savings and unsure how to start investing.",
        "Personal Finance",
        "🏦",
    ),
    (
        "Subscription Creep",
        "Paying for forgotten subscriptions that quietly add up.",
        "Personal Finance",
        "🔁",
    ),
    // Mental Wellbeing
    (
        "Anxiety",
        "Persistent worry and nervousness that gets in the way of daily life.",
        "Mental Wellbeing",
        "😟",
    ),
    (
        "Burnout",
        "Emotional and physical exhaustion from prolonged stress at work.",
        "Mental Wellbeing",
        "🔥",
    ),
    (
        "Loneliness",
        "Feeling isolated and disconnected from other people.",
        "Mental Wellbeing",
        "🫥",
    ),
    (
        "Low Self-Esteem",
        "Doubting your own worth and abilities.",
        "Mental Wellbeing",
        "🪞",
    ),
    // Relationships & Social
    (
        "Finding a Partner",
        "Dating apps that feel exhausting and rarely lead anywhere.",
        "Relationships & Social",
        "💘",
    ),
    (
        "Making Friends as an Adult",
        "Struggling to build new friendships after school or a move.",
        "Relationships & Social",
        "🤝",
    ),
    (
        "Family Conflict",
        "Recurring arguments and tension with relatives.",
        "Relationships & Social",
        "🏠",
    ),
    // Career & Work
    (
        "Job Hunting",
        "Sending endless applications and hearing nothing back.",
        "Career & Work",
        "💼",
    ),
    (
        "Career Stagnation",
        "Feeling stuck in a role with no clear path to growth.",
        "Career & Work",
        "🧗",
    ),
    (
        "Public Speaking Fear",
        "Dreading presentations, pitches and speaking up in meetings.",
        "Career & Work",
        "🎤",
    ),
    (
        "Work-Life Balance",
        "Work spilling into evenings and weekends with no real downtime.",
        "Career & Work",
        "⚖️",
    ),
    // Learning & Skills
    (
        "Learning a Language",
        "Starting a new language again and again without ever getting fluent.",
        "Learning & Skills",
        "🗣️",
    ),
    (
        "Information Overload",
        "Too many articles, courses and podcasts to ever absorb.",
        "Learning & Skills",
        "📚",
    ),
    (
        "Building Good Habits",
        "Starting new routines with enthusiasm and dropping them a week later.",
        "Learning & Skills",
        "🌱",
    ),
    // Home & Daily Life
    (
        "Cluttered Home",
        "Too much stuff and not enough space or time to tidy it.",
        "Home & Daily Life",
        "📦",
    ),
    (
        "Meal Planning",
        "Deciding what to eat every day and shopping for it.",
        "Home & Daily Life",
        "🥗",
    ),
    (
        "Long Commutes",
        "Hours lost every week stuck in traffic or on crowded trains.",
        "Home & Daily Life",
        "🚗",
    ),
    (
        "Pet Care",
        "Keeping pets healthy, exercised and looked after on a busy schedule.",
        "Home & Daily Life",
        "🐶",
    ),
    // Parenting & Family
    (
        "Screen Time for Kids",
        "Kids glued to devices and constant battles over limits.",
        "Parenting & Family",
        "🧒",
    ),
    (
        "Finding Childcare",
        "Reliable, affordable childcare that is nearly impossible to find.",
        "Parenting & Family",
        "🍼",
    ),
    (
        "Caring for Aging Parents",
        "Coordinating health, money and daily support for elderly relatives.",
        "Parenting & Family",
        "👵",
    ),
];
