use crate::model::{Flashcard, MemoryPair, QuizItem};

pub(super) static FLASHCARDS: &[Flashcard] = &[
    Flashcard::new(
        "Somatization disorder",
        "Multiple, frequently changing physical symptoms (at least 6) over more than 2 years without an adequate somatic explanation",
    ),
    Flashcard::new(
        "Hypochondriacal disorder",
        "Persistent conviction of having one or more serious physical illnesses (duration: 6 months), or persistent preoccupation with a presumed disfigurement",
    ),
    Flashcard::new(
        "Somatoform autonomic dysfunction",
        "Symptoms of an autonomically innervated organ (cardiovascular, respiratory, gastrointestinal) + autonomic arousal + intense preoccupation with a presumed illness",
    ),
    Flashcard::new(
        "Persistent somatoform pain disorder",
        "Persistent, severe and distressing pain not fully explained by a physiological process, occurring together with emotional or psychosocial stress",
    ),
    Flashcard::new(
        "ICD-11: Bodily distress disorder",
        "Bodily symptoms + excessive attention + repeated contact with healthcare providers + persistence over several months",
    ),
    Flashcard::new(
        "DSM-5: Somatic Symptom Disorder (SSD)",
        "Distressing somatic symptoms + excessive thoughts, feelings or behaviours related to the symptoms + chronicity > 6 months",
    ),
    Flashcard::new(
        "Illness Anxiety Disorder (DSM-5)",
        "Worry about having a serious illness + no or mild symptoms + high anxiety + excessive health-related behaviour + 6 months",
    ),
    Flashcard::new(
        "Conversion Disorder (DSM-5)",
        "Altered motor or sensory function without a neurological explanation + significant distress and impairment",
    ),
    Flashcard::new(
        "Important warning (Cave!)",
        "Avoid iatrogenic fixation and chronification through repeated examinations despite negative findings!",
    ),
    Flashcard::new(
        "7 screening symptoms",
        "Vomiting, abdominal pain, nausea, bloating, diarrhoea, food intolerance, pain; 2 or more symptoms indicate a high probability",
    ),
];

pub(super) static QUIZ: &[QuizItem] = &[
    QuizItem::new(
        "For how long must symptoms persist in somatization disorder?",
        ["6 months", "1 year", "2 years", "3 years"],
        2,
        "In somatization disorder the symptoms must persist for more than 2 years.",
    ),
    QuizItem::new(
        "How many symptoms are required at minimum for somatization disorder?",
        ["3 symptoms", "4 symptoms", "5 symptoms", "6 symptoms"],
        3,
        "Diagnosing somatization disorder requires at least 6 symptoms.",
    ),
    QuizItem::new(
        "Which of these is NOT a synonym for functional disorders?",
        [
            "Psychovegetative disorder",
            "Vegetative dystonia",
            "Bipolar disorder",
            "Organ neurosis",
        ],
        2,
        "Bipolar disorder is an affective disorder, not a synonym for functional disorders.",
    ),
    QuizItem::new(
        "What duration applies to hypochondriacal disorder?",
        ["3 months", "6 months", "12 months", "24 months"],
        1,
        "Hypochondriacal disorder must persist for at least 6 months.",
    ),
    QuizItem::new(
        "What characterizes conversion disorder?",
        [
            "Pain only",
            "Altered motor/sensory function",
            "Anxiety only",
            "Autonomic symptoms only",
        ],
        1,
        "Conversion disorder is characterized by altered motor or sensory function.",
    ),
    QuizItem::new(
        "Which organ system is NOT typical for somatoform autonomic dysfunction?",
        [
            "Cardiovascular",
            "Respiratory",
            "Gastrointestinal",
            "Musculoskeletal",
        ],
        3,
        "The musculoskeletal system is not typical for somatoform autonomic dysfunction.",
    ),
    QuizItem::new(
        "What is the minimum number of screening symptoms indicating a high probability?",
        ["1 symptom", "2 symptoms", "3 symptoms", "4 symptoms"],
        1,
        "2 or more of the 7 screening symptoms indicate a high probability.",
    ),
    QuizItem::new(
        "Which disorder was formerly called hypochondriacal disorder?",
        [
            "Somatic Symptom Disorder",
            "Illness Anxiety Disorder",
            "Conversion Disorder",
            "Factitious Disorder",
        ],
        1,
        "Illness Anxiety Disorder (DSM-5) corresponds to the former hypochondriacal disorder.",
    ),
];

pub(super) static MEMORY_PAIRS: &[MemoryPair] = &[
    MemoryPair::new("Somatization", ">2 years, 6+ symptoms"),
    MemoryPair::new("Hypochondria", "6 months of illness anxiety"),
    MemoryPair::new("Autonomic dysfunction", "Vegetative symptoms"),
    MemoryPair::new("Pain disorder", "Distressing pain"),
    MemoryPair::new("ICD-11", "Bodily distress"),
    MemoryPair::new("DSM-5 SSD", "Excessive thoughts"),
    MemoryPair::new("Conversion", "Motor/sensory disturbance"),
    MemoryPair::new("Cave!", "Iatrogenic fixation"),
];
