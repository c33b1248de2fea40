//! Static study material served when the generation API cannot answer.

use crate::markup::escape_html;
use crate::models::domain::{EnglishLevel, ExerciseType};

pub fn summary_fallback(article_title: &str, level: EnglishLevel) -> String {
    let title = escape_html(article_title);
    format!(
        r#"<h1>Summary: {title}</h1>
<h2>{label} English Summary</h2>
<p>This is an educational summary about {title}. The AI summary service is currently unavailable, but you can still read the full Wikipedia article to learn more about this topic.</p>
<p>To practice your English skills, read the article and look up any new vocabulary words you find. This will help improve your reading comprehension and expand your knowledge.</p>
<p><strong>Study Tips:</strong></p>
<ul>
    <li>Read the article slowly and carefully</li>
    <li>Write down new vocabulary words</li>
    <li>Try to summarize each paragraph in your own words</li>
    <li>Look for the main ideas and supporting details</li>
</ul>"#,
        title = title,
        label = level.label(),
    )
}

pub fn lesson_fallback(article_title: &str, level: EnglishLevel) -> String {
    format!(
        r#"<h1>English Lesson: {title}</h1>
<h2>{label} Level</h2>
<p>The AI lesson generator is currently unavailable. You can still practice your English with the article about {title} using these learning activities:</p>

<h2>1. Reading Comprehension</h2>
<p>Read the Wikipedia article carefully and practice these skills:</p>
<ul>
    <li>Identify the main topic and key points</li>
    <li>Look for new vocabulary words</li>
    <li>Notice sentence structures and grammar patterns</li>
</ul>

<h2>2. Vocabulary Practice</h2>
<p>As you read, write down:</p>
<ul>
    <li>Words you don't know</li>
    <li>Technical terms related to the topic</li>
    <li>Phrases that seem important</li>
</ul>

<h2>3. Discussion Questions</h2>
<ol>
    <li>What is the main subject of this article?</li>
    <li>What new information did you learn?</li>
    <li>How does this topic connect to your interests or daily life?</li>
</ol>

<h2>4. Writing Exercise</h2>
<p>Write a short summary of the article in your own words. This will help you practice expressing ideas clearly in English.</p>"#,
        title = escape_html(article_title),
        label = level.label(),
    )
}

pub fn exercise_fallback(article_title: &str, level: EnglishLevel, exercise_type: ExerciseType) -> String {
    let (heading, section, activities) = match exercise_type {
        ExerciseType::Grammar => ("Grammar Exercise", "Grammar Practice Activities", GRAMMAR_ACTIVITIES),
        ExerciseType::Vocabulary => ("Vocabulary Exercise", "Vocabulary Building Activities", VOCABULARY_ACTIVITIES),
        ExerciseType::Extra => ("Extra Practice Exercise", "Comprehensive Practice Activities", EXTRA_ACTIVITIES),
    };

    let items: String = activities
        .iter()
        .map(|(name, task)| format!("\n    <li><strong>{}:</strong> {}</li>", name, task))
        .collect();

    format!(
        r#"<h1>{heading} - {label}</h1>
<p>The AI exercise generator is currently unavailable. Practice with these activities related to {title}:</p>

<h2>{section}</h2>
<ol>{items}
</ol>"#,
        heading = heading,
        label = level.label(),
        title = escape_html(article_title),
        section = section,
        items = items,
    )
}

const GRAMMAR_ACTIVITIES: &[(&str, &str)] = &[
    ("Sentence Analysis", "Find 5 complex sentences in the article and identify the main clause and subordinate clauses."),
    ("Tense Practice", "Look for examples of different verb tenses in the article and write down 3 examples of each tense you find."),
    ("Article Usage", "Notice how \"a,\" \"an,\" and \"the\" are used in the text. Write down 10 examples."),
    ("Passive Voice", "Find sentences written in passive voice and rewrite them in active voice."),
    ("Conditional Sentences", "Look for any conditional statements and identify their type."),
];

const VOCABULARY_ACTIVITIES: &[(&str, &str)] = &[
    ("Word Collection", "Find 20 new vocabulary words from the article and write their definitions."),
    ("Context Clues", "Choose 10 difficult words and try to guess their meaning from context before looking them up."),
    ("Word Families", "Find words that belong to the same word family (e.g., create, creation, creative)."),
    ("Synonyms and Antonyms", "For 15 key words from the article, find synonyms and antonyms."),
    ("Usage Practice", "Write original sentences using 10 new vocabulary words from the article."),
];

const EXTRA_ACTIVITIES: &[(&str, &str)] = &[
    ("Summary Writing", "Write a 150-word summary of the article in your own words."),
    ("Question Formation", "Create 10 questions about the article content that test comprehension."),
    ("Opinion Essay", "Write a short essay expressing your opinion about the topic (200-300 words)."),
    ("Presentation Prep", "Prepare a 5-minute presentation about the topic for classmates."),
    ("Research Extension", "Find one additional source about this topic and compare the information."),
];
