// lessonguard-core/src/planner.rs
//! The lesson-planning pipeline: prompt, generate, parse, validate, sanitize.
//!
//! Text generation is behind the [`TextBackend`] trait. Whatever the backend
//! returns, [`LessonPlanner::plan`] only ever hands back a sanitized tree.
//!
//! License: MIT OR APACHE 2.0

use jsonschema::JSONSchema;
use log::{debug, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::errors::GuardError;
use crate::plan_node::PlanNode;
use crate::sanitizer::ContentSanitizer;

const PROMPT_TEMPLATE: &str = "Create a detailed curriculum plan for {grade_level} students studying {subject}.

Parameters:
- Grade Level: {grade_level}
- Subject: {subject}
- Duration: {duration}
- Constraints: {constraints}

Please respond with a JSON object containing exactly these fields:
- lesson_title: A clear, engaging title for the lesson
- learning_objectives: Array of specific, measurable learning objectives
- content_outline: Array of objects with \"title\" and \"description\" for each section
- suggested_assessments: Array of assessment methods and activities

Ensure the content is age-appropriate and educationally sound for {grade_level} level.";

/// Default system message sent alongside the prompt by chat-style backends.
pub const SYSTEM_PROMPT: &str =
    "You are an expert curriculum designer. Always respond with valid JSON matching the requested schema.";

/// What the caller wants a lesson plan for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    pub grade_level: String,
    pub subject: String,
    pub audience_baseline: String,
    pub duration: String,
    pub constraints: Vec<String>,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            grade_level: "Unknown Grade".to_string(),
            subject: "Unknown Subject".to_string(),
            audience_baseline: "grade-appropriate prior knowledge".to_string(),
            duration: "45 minutes".to_string(),
            constraints: vec!["age-appropriate".to_string(), "privacy-protecting".to_string()],
        }
    }
}

impl PlanRequest {
    pub fn new<G: Into<String>, S: Into<String>>(grade_level: G, subject: S) -> Self {
        Self {
            grade_level: grade_level.into(),
            subject: subject.into(),
            ..Default::default()
        }
    }
}

/// Renders the generation prompt for `request`.
pub fn generate_prompt(request: &PlanRequest) -> Result<String, GuardError> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("prompt", PROMPT_TEMPLATE)
        .map_err(|e| GuardError::TemplateError(e.to_string()))?;

    let constraints = if request.constraints.is_empty() {
        "None specified".to_string()
    } else {
        request.constraints.join(", ")
    };
    let ctx = json!({
        "grade_level": request.grade_level,
        "subject": request.subject,
        "duration": request.duration,
        "constraints": constraints,
    });
    tt.render("prompt", &ctx)
        .map_err(|e| GuardError::TemplateError(e.to_string()))
}

/// Knobs passed through to the text backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub model: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            system_prompt: SYSTEM_PROMPT.to_string(),
            max_tokens: 1500,
            temperature: 0.7,
        }
    }
}

/// A source of generated plan text.
pub trait TextBackend: Send + Sync {
    fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String, GuardError>;
}

/// Backend that ignores the prompt and returns a fixed demonstration plan.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineBackend;

impl OfflineBackend {
    pub fn demo_plan() -> serde_json::Value {
        json!({
            "lesson_title": "Introduction to Environmental Science",
            "learning_objectives": [
                "Students will define what an ecosystem is",
                "Students will identify biotic and abiotic factors",
                "Students will explain food chains and energy flow"
            ],
            "content_outline": [
                {
                    "title": "What is an Ecosystem?",
                    "description": "Introduce the concept of ecosystems using local examples"
                },
                {
                    "title": "Living vs Non-Living Components",
                    "description": "Explore biotic and abiotic factors through hands-on activities"
                },
                {
                    "title": "Energy Flow in Ecosystems",
                    "description": "Demonstrate food chains and energy transfer concepts"
                }
            ],
            "suggested_assessments": [
                "Ecosystem components identification worksheet",
                "Food chain construction activity",
                "Exit ticket with key vocabulary terms"
            ]
        })
    }
}

impl TextBackend for OfflineBackend {
    fn generate(&self, _prompt: &str, params: &GenerationParams) -> Result<String, GuardError> {
        debug!(
            "Offline backend: returning demonstration plan (model '{}' not called, system prompt {} chars).",
            params.model,
            params.system_prompt.len()
        );
        Ok(serde_json::to_string_pretty(&Self::demo_plan())?)
    }
}

/// Strips a surrounding Markdown code fence (```` ```json ```` or ```` ``` ````).
pub fn extract_json_payload(response: &str) -> &str {
    let trimmed = response.trim();
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"));
    match inner {
        Some(rest) => rest.strip_suffix("```").unwrap_or(rest).trim(),
        None => trimmed,
    }
}

/// Parses backend output (optionally fenced) into a plan tree.
pub fn parse_plan(response: &str) -> Result<PlanNode, GuardError> {
    let value: serde_json::Value = serde_json::from_str(extract_json_payload(response))?;
    Ok(PlanNode::from(value))
}

/// The lesson-plan schema. Extra keys are allowed.
static PLAN_SCHEMA: Lazy<serde_json::Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "lesson_title": {"type": "string"},
            "learning_objectives": {"type": "array", "items": {"type": "string"}},
            "content_outline": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": {"type": "string"},
                        "description": {"type": "string"}
                    },
                    "required": ["title", "description"]
                }
            },
            "suggested_assessments": {"type": "array", "items": {"type": "string"}}
        },
        "required": ["lesson_title", "learning_objectives", "content_outline", "suggested_assessments"]
    })
});

static PLAN_VALIDATOR: Lazy<Result<JSONSchema, String>> =
    Lazy::new(|| JSONSchema::compile(&PLAN_SCHEMA).map_err(|e| e.to_string()));

/// Renders a JSON pointer (`/content_outline/1/title`) as `$.content_outline[1].title`.
fn display_path(segments: Vec<String>) -> String {
    let mut path = String::from("$");
    for segment in segments {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            path.push_str(&format!("[{}]", segment));
        } else {
            path.push('.');
            path.push_str(&segment);
        }
    }
    path
}

/// Checks `plan` against the lesson-plan schema. Every violation is
/// reported, each prefixed with the path of the offending value.
pub fn validate_plan(plan: &PlanNode) -> Result<(), GuardError> {
    let validator = PLAN_VALIDATOR
        .as_ref()
        .map_err(|e| GuardError::Fatal(format!("Invalid plan schema: {}", e)))?;

    let instance = serde_json::Value::from(plan.clone());
    validator.validate(&instance).map_err(|errors| {
        let messages: Vec<String> = errors
            .map(|e| format!("{}: {}", display_path(e.instance_path.clone().into_vec()), e))
            .collect();
        GuardError::ValidationError(messages.join("; "))
    })?;
    Ok(())
}

/// Runs the full pipeline against a backend.
#[derive(Clone)]
pub struct LessonPlanner {
    backend: Arc<dyn TextBackend>,
    sanitizer: ContentSanitizer,
    params: GenerationParams,
}

impl LessonPlanner {
    pub fn new(backend: Arc<dyn TextBackend>, sanitizer: ContentSanitizer) -> Self {
        Self {
            backend,
            sanitizer,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Generates, validates and sanitizes a plan. The returned tree has been
    /// through the sanitizer; on any error no plan is returned.
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanNode, GuardError> {
        info!("Planning lesson: {} / {}", request.grade_level, request.subject);
        let prompt = generate_prompt(request)?;
        debug!("Prompt rendered ({} chars).", prompt.len());

        let response = self.backend.generate(&prompt, &self.params)?;
        let plan = parse_plan(&response)?;
        validate_plan(&plan)?;
        debug!("Plan validated; sanitizing {} top-level fields.", plan.len());

        Ok(self.sanitizer.enforce_constraints(plan))
    }
}
