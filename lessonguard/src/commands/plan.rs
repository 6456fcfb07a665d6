// lessonguard/src/commands/plan.rs
//! `lessonguard plan`: run the planning pipeline and print the sanitized plan.

use anyhow::{Context, Result};
use comfy_table::{presets, ContentArrangement, Table};
use is_terminal::IsTerminal;
use log::info;
use std::fs;
use std::io::{self, Write};
use std::sync::Arc;

use lessonguard_core::{ContentSanitizer, GenerationParams, LessonPlanner, OfflineBackend, PlanNode, PlanRequest};

use super::{info_msg, load_config, write_output};
use crate::cli::PlanCommand;
use crate::ui::output_format::{print_header, print_success_message};

impl From<&PlanCommand> for PlanRequest {
    fn from(cmd: &PlanCommand) -> Self {
        PlanRequest {
            grade_level: cmd.grade.clone(),
            subject: cmd.subject.clone(),
            audience_baseline: cmd.baseline.clone(),
            duration: cmd.duration.clone(),
            constraints: cmd.constraints.clone(),
        }
    }
}

pub fn run_plan(cmd: &PlanCommand, quiet: bool) -> Result<()> {
    let sanitizer = ContentSanitizer::new(load_config(&cmd.rules)?)?;
    let planner = LessonPlanner::new(Arc::new(OfflineBackend), sanitizer).with_params(GenerationParams {
        model: cmd.model.clone(),
        ..Default::default()
    });

    if !quiet && !cmd.json_only {
        info_msg("No text generation backend is configured; using the offline demonstration plan.");
    }

    let request = PlanRequest::from(cmd);
    let plan = planner.plan(&request).context("Plan generation failed")?;
    let json = serde_json::to_string_pretty(&plan)?;

    if let Some(path) = &cmd.output {
        info!("Writing sanitized plan to file: {}", path.display());
        fs::write(path, format!("{}\n", json))
            .with_context(|| format!("Failed to write plan to {}", path.display()))?;
    }

    if cmd.json_only {
        return write_output(None, &json);
    }

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let colors = stdout.is_terminal();
    render_plan(&mut writer, &request, &plan, colors)?;
    writeln!(writer)?;
    print_header(&mut writer, "Sanitized JSON", colors)?;
    writeln!(writer, "{}", json)?;
    print_success_message(&mut writer, "Plan generated, validated and sanitized.", colors)?;
    writer.flush()?;
    Ok(())
}

fn numbered<W: Write>(writer: &mut W, items: Option<&[PlanNode]>) -> io::Result<()> {
    for (i, text) in items.unwrap_or_default().iter().filter_map(PlanNode::as_text).enumerate() {
        writeln!(writer, "  {}. {}", i + 1, text)?;
    }
    Ok(())
}

/// Human-readable view of a validated plan.
pub fn render_plan<W: Write>(writer: &mut W, request: &PlanRequest, plan: &PlanNode, colors: bool) -> io::Result<()> {
    let mut params = Table::new();
    params
        .load_preset(if colors { presets::UTF8_FULL } else { presets::ASCII_FULL })
        .set_header(vec!["Parameter", "Value"])
        .add_row(vec!["Grade Level", request.grade_level.as_str()])
        .add_row(vec!["Subject", request.subject.as_str()])
        .add_row(vec!["Baseline", request.audience_baseline.as_str()])
        .add_row(vec!["Duration", request.duration.as_str()]);
    params.add_row(vec!["Constraints".to_string(), request.constraints.join(", ")]);
    writeln!(writer, "{}", params)?;

    let title = plan.get("lesson_title").and_then(PlanNode::as_text).unwrap_or_default();
    print_header(writer, &format!("Lesson: {}", title), colors)?;

    print_header(writer, "Learning Objectives", colors)?;
    numbered(writer, plan.get("learning_objectives").and_then(PlanNode::as_sequence))?;

    print_header(writer, "Content Outline", colors)?;
    let mut outline = Table::new();
    outline
        .load_preset(if colors { presets::UTF8_FULL } else { presets::ASCII_FULL })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Section", "Description"]);
    let sections = plan.get("content_outline").and_then(PlanNode::as_sequence).unwrap_or_default();
    for section in sections {
        let field = |name: &str| section.get(name).and_then(PlanNode::as_text).unwrap_or_default().to_string();
        outline.add_row(vec![field("title"), field("description")]);
    }
    writeln!(writer, "{}", outline)?;

    print_header(writer, "Suggested Assessments", colors)?;
    numbered(writer, plan.get("suggested_assessments").and_then(PlanNode::as_sequence))
}
