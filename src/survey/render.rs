//! Materializes the survey definition into an HTML form fragment.
//!
//! Single- and multi-choice questions become labeled radio/checkbox groups
//! named by question key; the ranked-choice question becomes three ordered
//! selects, each offering the full option set behind an empty placeholder.

use crate::survey::questions::{questions, Question, QuestionKind, RANK_SLOTS};

pub fn render_survey_form() -> String {
    let mut out = String::with_capacity(16 * 1024);

    for question in questions() {
        render_question(question, &mut out);
    }

    out
}

fn render_question(question: &Question, out: &mut String) {
    out.push_str("<div class=\"survey-question\">\n");
    out.push_str("<h3>");
    push_escaped(question.prompt, out);
    out.push_str("</h3>\n<div class=\"options\">\n");

    match question.kind {
        QuestionKind::Single => render_inputs(question, "radio", out),
        QuestionKind::Multi => render_inputs(question, "checkbox", out),
        QuestionKind::Ranked => render_rank_selects(question, out),
    }

    out.push_str("</div>\n</div>\n");
}

fn render_inputs(question: &Question, input_type: &str, out: &mut String) {
    let name = question.key();

    for (code, label) in question.options {
        let input_id = format!("{name}_{code}");

        out.push_str("<div class=\"option-item\">");
        out.push_str(&format!(
            "<input type=\"{input_type}\" name=\"{name}\" value=\"{code}\" id=\"{input_id}\">"
        ));
        out.push_str(&format!("<label for=\"{input_id}\">{code}. "));
        push_escaped(label, out);
        out.push_str("</label></div>\n");
    }
}

fn render_rank_selects(question: &Question, out: &mut String) {
    let name = question.key();

    for slot in 1..=RANK_SLOTS {
        out.push_str(&format!("<select id=\"{name}_rank{slot}\">\n"));
        // Placeholder distinct from any real option
        out.push_str(&format!("<option value=\"\">选择第{slot}名</option>\n"));

        for (code, label) in question.options {
            out.push_str(&format!("<option value=\"{code}\">{code}. "));
            push_escaped(label, out);
            out.push_str("</option>\n");
        }

        out.push_str("</select>\n");
    }
}

fn push_escaped(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
