//! Prompt templates for the text-generation API.
//!
//! Every prompt names the learner level by its label (e.g. "Elementary
//! (A1-A2)") and pins down the HTML skeleton the model is asked to return.

use crate::models::domain::{EnglishLevel, ExerciseType};

/// Characters of article body forwarded to the lesson prompt.
pub const LESSON_BODY_CHAR_LIMIT: usize = 2000;

/// Language constraints for summaries.
pub fn summary_instructions(level: EnglishLevel) -> &'static str {
    match level {
        EnglishLevel::Elementary => "Elementary language constraints: use simple vocabulary and grammar suitable for A1-A2 English level. Use short sentences (maximum 8-10 words). Avoid complex words, idioms, and phrasal verbs. Use simple present and past tenses only. Explain any technical terms.",
        EnglishLevel::Intermediate => "Intermediate language constraints: use vocabulary and grammar suitable for B1-B2 English level. Use a mix of simple and compound sentences. Include some common idioms and phrasal verbs, but explain them if they are important to understanding. Use a variety of tenses.",
        EnglishLevel::Professional => "Professional language constraints: use advanced vocabulary and grammar suitable for C1-C2 English level. Use complex sentence structures, academic vocabulary, varied tenses, and specialized terminology appropriate to the subject. Do not simplify content.",
    }
}

/// Learner description for lesson plans.
pub fn lesson_instructions(level: EnglishLevel) -> &'static str {
    match level {
        EnglishLevel::Elementary => "Elementary A1-A2 learners. Use simple vocabulary and grammar. Focus on basic sentence structures, common everyday words, and simple present and past tenses.",
        EnglishLevel::Intermediate => "Intermediate B1-B2 learners. Use a moderate range of vocabulary and grammar structures. Include some idioms and phrasal verbs with explanations. Use various tenses and conditional forms.",
        EnglishLevel::Professional => "Professional C1-C2 learners. Use advanced vocabulary, complex grammar structures, idiomatic expressions, and academic language. Challenge the learner with sophisticated content.",
    }
}

pub fn summary_prompt(article_title: &str, level: EnglishLevel) -> String {
    format!(
        r#"Write a comprehensive summary about "{title}" for {label} English learners.

{instructions}

Format requirements:
1. Begin with a clear title in an <h1> element
2. Structure the content with clear paragraphs (<p>) and headings (<h2>)
3. Conclude with 2-3 sentences summarizing the main points

Return clean HTML only. Make the summary engaging, educational, and factually accurate. Maintain all important information while adapting the language to the {label} level."#,
        title = article_title,
        label = level.label(),
        instructions = summary_instructions(level),
    )
}

/// First `LESSON_BODY_CHAR_LIMIT` characters, cut on a char boundary.
pub fn truncate_body(body: &str) -> &str {
    match body.char_indices().nth(LESSON_BODY_CHAR_LIMIT) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}

pub fn lesson_prompt(article_title: &str, level: EnglishLevel, article_body: &str) -> String {
    format!(
        r#"Create a comprehensive English language lesson plan based on the Wikipedia article "{title}", suitable for {instructions}

Your lesson plan must include exactly these sections, formatted with clean HTML:

<h1>English Lesson: {title}</h1>

<h2>1. Vocabulary (Exactly 10 New Words)</h2>
- Create an HTML table with exactly 10 new vocabulary words from the article
- For each word include: Word, Part of Speech, Definition, Example Sentence
- Choose words appropriate for a {label} learner

<h2>2. Reading Comprehension</h2>
<h3>Summary</h3>
- Write a level-appropriate summary of the article (3-4 paragraphs)
<h3>True/False Questions</h3>
- Write 5 true/false questions about the article
- Format answers as: <details><summary>Show answer</summary>True/False</details>
<h3>Wh- Questions</h3>
- Write 5 questions (What/Who/Where/When/Why/How)
- Format answers as: <details><summary>Show answer</summary>Answer</details>

<h2>3. Word Matching Exercise</h2>
- Create a two-column table (Word | Definition)
- Add an answer key inside a <details> element

<h2>4. Fill in the Blanks</h2>
- Write one paragraph with 8-10 blanks
- Show the word bank as an unordered list
- Add the completed text inside a <details> element

<h2>5. Discussion (Speaking Practice)</h2>
- Provide 3 discussion questions related to the article topic
- For each question include 2-3 guiding points

<h2>6. Essay Theme</h2>
- Provide a writing prompt related to the article topic
- Include specific requirements (word count, elements to include)
- Tailor the difficulty to the {label} level

Use tables for all exercises. Make the lesson engaging, practical, and focused on real language use.

Article content (first {limit} characters):
{body}"#,
        title = article_title,
        label = level.label(),
        instructions = lesson_instructions(level),
        limit = LESSON_BODY_CHAR_LIMIT,
        body = truncate_body(article_body),
    )
}

pub fn exercise_prompt(article_title: &str, level: EnglishLevel, exercise_type: ExerciseType) -> String {
    match exercise_type {
        ExerciseType::Grammar => grammar_prompt(article_title, level),
        ExerciseType::Vocabulary => vocabulary_prompt(article_title, level),
        ExerciseType::Extra => extra_practice_prompt(article_title, level),
    }
}

fn grammar_prompt(article_title: &str, level: EnglishLevel) -> String {
    format!(
        r#"You are an experienced ESL content writer.

Create exactly 10 grammar exercises based on the article "{title}".
The learners' level is {label}.
Focus on 1-2 grammar points that the article naturally illustrates (e.g. Past Simple vs Present Perfect, passive voice, modal verbs).

Return pure HTML using exactly this skeleton:

<div class="lesson-section">
  <h2>Grammar Exercises</h2>
  <ol>
    <!-- repeat 10 times -->
    <li>
      <strong>Question #n:</strong> <em>the question</em>
      <details><summary>Show answer</summary>Correct answer and a brief explanation (1-2 sentences).</details>
    </li>
  </ol>
</div>"#,
        title = article_title,
        label = level.label(),
    )
}

fn vocabulary_prompt(article_title: &str, level: EnglishLevel) -> String {
    format!(
        r#"You are an ESL materials writer.

Select 12 key words or phrases from the article "{title}" that a {label} learner should know.

For each word provide:
1. The word itself.
2. A concise definition (15 words or fewer, plain English).
3. An example sentence from the article context with the word blanked as "_____".

Return strictly HTML with this structure:

<div class="lesson-section">
  <h2>Vocabulary Trainer</h2>
  <table>
    <thead><tr><th>Word</th><th>Definition</th><th>Example (gap-fill)</th></tr></thead>
    <tbody>
      <!-- 12 rows -->
      <tr><td>example</td><td>a thing that shows...</td><td>He gave an _____ of...</td></tr>
    </tbody>
  </table>
  <details><summary>Show answers</summary>
    <ol>
      <!-- 12 answers to the gap-fill sentences -->
      <li>example</li>
    </ol>
  </details>
</div>"#,
        title = article_title,
        label = level.label(),
    )
}

fn extra_practice_prompt(article_title: &str, level: EnglishLevel) -> String {
    format!(
        r#"You are an ESL lesson designer.

Create an "Extra Practice" block for the article "{title}" at the {label} level.

Content:
* 5 comprehension questions (factual, answerable from the text).
* 5 discussion prompts (open-ended opinion questions).
* 1 short writing task (about 60 words) related to the topic.

Output pure HTML exactly like this:

<div class="lesson-section">
  <h2>Extra Practice</h2>
  <h3>Comprehension Check</h3>
  <ol>
    <!-- 5 times -->
    <li>Question #n<details><summary>Show answer</summary>Answer sentence.</details></li>
  </ol>
  <h3>Discuss</h3>
  <ul>
    <!-- 5 times -->
    <li>Open question #n</li>
  </ul>
  <h3>Writing Task</h3>
  <p>Write about 60 words: <em>prompt text</em></p>
</div>"#,
        title = article_title,
        label = level.label(),
    )
}
