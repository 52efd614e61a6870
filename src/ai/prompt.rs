use serde_json::{json, Value};

const SYSTEM_PROMPT: &str = r#"
You are a tool-calling model working on the task in the 'task_description' XML block:

<task_description>Respond with the next git operation tool call based on the desired action</task_description>

You will be given a single task in the 'question' XML block.
Solve the task in 'question' block by generating an appropriate tool call according to the provided tool schema.
Generate only the answer, do not generate anything else.


Rules for generating the answers:
- It should be a JSON object with exactly two keys: "name" and "parameters".
- Do not include any other keys.
- Do not add anything, except valid JSON.
- Do not include trailing commas.
- Do not add anything before/after the tool call.
- Stick to the format of the following examples:

{"name": "refresh_page", "parameters": {}}
{"name": "get_weather", "parameters": {"location": "Paris, France"}}
"#;

/// Worked examples shown to the model ahead of the real question.
const EXAMPLES: &[(&str, &str)] = &[
    (
        "apply stash@{5}",
        r#"{"name": "git_stash", "parameters": {"action": "apply", "stash_ref": "stash@{5}"}}"#,
    ),
    (
        "commit fix: typos",
        r#"{"name": "git_commit", "parameters": {"message": "fix: typos"}}"#,
    ),
];

fn user_prompt(question: &str) -> String {
    let mut prompt = String::from(
        "Here are examples that show how this task can be solved\n\
         In examples, contexts are in the context XML block, tasks in the question XML block, solutions in the answer XML block\n\
         When solving a real task, generate only the answer, do not generate anything else\n\n",
    );
    for (q, a) in EXAMPLES {
        prompt.push_str(&format!(
            "\n<example>\n<question>{}</question>\n<answer>{}</answer>\n</example>\n",
            q, a
        ));
    }
    prompt.push_str(&format!(
        "Now for the real task, solve the task in question block.\n\
         Generate only the solution, do not generate anything else.\n\n\
         <question>{}</question>",
        question
    ));
    prompt
}

/// Chat messages for a single question.
pub fn messages(question: &str) -> Value {
    json!([
        {"role": "system", "content": SYSTEM_PROMPT},
        {"role": "user", "content": user_prompt(question)},
    ])
}
