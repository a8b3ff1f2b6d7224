use crate::request::BlogPostRequest;

const BASE_INSTRUCTION: &str = "You are an expert blog post writer. Your goal is to generate high-quality blog content based on user specifications.";

const GUIDANCE: &str = "Adhere strictly to the requested tone, style, length, and target audience.
The blog post should be well-structured with clear paragraphs. If appropriate for the content and style, use headings (e.g., ## Heading) or bullet points for readability.
Begin the blog post directly without any preambles like \"Here's your blog post:\", \"Certainly, here is the blog post you requested:\", or similar introductory phrases.
Output only the blog post content itself. Do not include any of your own meta-commentary or self-correction notes.";

/// The two strings sent to the provider for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptParts {
    pub system_instruction: String,
    pub user_prompt: String,
}

pub fn build_prompt(req: &BlogPostRequest) -> PromptParts {
    PromptParts {
        system_instruction: system_instruction(req),
        user_prompt: user_prompt(req),
    }
}

fn system_instruction(req: &BlogPostRequest) -> String {
    let mut out = String::from(BASE_INSTRUCTION);
    if let Some(persona) = req.persona_text() {
        out.push_str(&format!(
            "\nEmbody the following persona when writing: \"{persona}\"."
        ));
    }
    out.push('\n');
    out.push_str(GUIDANCE);
    out.push_str(&format!(
        "\nEnsure the length is approximately {} words.\n",
        req.length
    ));
    out
}

fn user_prompt(req: &BlogPostRequest) -> String {
    format!(
        "\nGenerate a blog post with the following characteristics:\n\
         Topic: \"{}\"\n\
         Tone: \"{}\"\n\
         Style: \"{}\"\n\
         Target Audience: \"{}\"\n\
         Approximate Length: \"{} words\"\n",
        req.topic, req.tone, req.style, req.audience, req.length
    )
}
