//! Scripted narratives
//!
//! A script is plain data: an ordered list of steps with no branching and
//! no external input, so the same script always yields the same frames.

use serde::{Deserialize, Serialize};

use crate::config::Timing;
use crate::core::ColorTag::{Blue, Cyan, Dim, Green, Orange, Purple, Text, White, Yellow};
use crate::core::{ColorTag, Line, Segment};

use super::sequencer::Pause;

/// One scripted effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Type into the existing last line
    Type(Line),
    /// Append a finished line and hold it briefly
    Instant(Line),
    /// Append a line, no capture
    Append(Line),
    /// Replace the last line, no capture
    SetLast(Line),
    /// Repeat the current frame
    Hold(Pause),
    /// Show or hide the cursor, no capture
    Cursor(bool),
}

/// Ordered list of steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn typed(&mut self, line: impl Into<Line>) -> &mut Self {
        self.steps.push(Step::Type(line.into()));
        self
    }

    pub fn instant(&mut self, line: impl Into<Line>) -> &mut Self {
        self.steps.push(Step::Instant(line.into()));
        self
    }

    pub fn append(&mut self, line: impl Into<Line>) -> &mut Self {
        self.steps.push(Step::Append(line.into()));
        self
    }

    /// Append an empty line to type into
    pub fn blank(&mut self) -> &mut Self {
        self.append(Line::new())
    }

    pub fn set_last(&mut self, line: impl Into<Line>) -> &mut Self {
        self.steps.push(Step::SetLast(line.into()));
        self
    }

    pub fn hold(&mut self, pause: Pause) -> &mut Self {
        self.steps.push(Step::Hold(pause));
        self
    }

    pub fn cursor(&mut self, visible: bool) -> &mut Self {
        self.steps.push(Step::Cursor(visible));
        self
    }

    /// Number of frames this script captures under `timing`
    pub fn expected_frames(&self, timing: &Timing) -> usize {
        let stride = timing.typing_speed.max(1);
        self.steps
            .iter()
            .map(|step| match step {
                Step::Type(line) => {
                    let typed: usize = line
                        .segments()
                        .iter()
                        .map(|s| s.char_count().div_ceil(stride))
                        .sum();
                    typed + Pause::Short.frames(timing)
                }
                Step::Instant(_) => timing.instant_hold,
                Step::Hold(pause) => pause.frames(timing),
                Step::Append(_) | Step::SetLast(_) | Step::Cursor(_) => 0,
            })
            .sum()
    }

    /// Yes/no approval prompt followed by the user's "y"
    fn approval(&mut self, question: &str) -> &mut Self {
        self.blank()
            .typed(vec![
                Segment::new("  → ", Yellow),
                Segment::new(question, Text),
                Segment::new("[Y/n]", Dim),
            ])
            .hold(Pause::Short)
            .append([("  ", Text), ("y", Green)])
            .hold(Pause::Medium)
    }

    /// Agent name followed by a dim status message
    fn agent(&mut self, name: &str, status: &str) -> &mut Self {
        self.blank()
            .typed(vec![Segment::new(name, Purple), Segment::new(status, Dim)])
            .hold(Pause::Short)
    }

    /// The Agentic InfraOps demo: plan, review, Bicep plan, implementation
    /// and summary for a HIPAA-compliant patient portal
    pub fn agentic_workflow() -> Self {
        let mut script = Script::new();

        // Opening
        script.append([("", Text)]).hold(Pause::Medium);

        // Step 1: user prompt and plan
        script
            .set_last([("$ ", Green), ("", Text)])
            .typed([
                ("$ ", Green),
                ("copilot ", Blue),
                ("\"Create HIPAA-compliant patient portal\"", Orange),
            ])
            .hold(Pause::Medium)
            .agent("@plan", " - Creating implementation plan...")
            .blank();
        for (label, value) in [
            (" Analyzed requirements: ", "HIPAA, patient data, portal"),
            (" Identified components: ", "App Service, SQL, Key Vault, WAF"),
            (" Estimated resources: ", "12 Azure services"),
        ] {
            script.instant([("  ", Text), ("✓", Green), (label, Text), (value, Cyan)]);
        }
        script
            .hold(Pause::Medium)
            .approval("Proceed to architecture review? ");

        // Step 2: architecture review
        script
            .agent("@azure-principal-architect", " - Reviewing architecture...")
            .blank()
            .instant(box_border('╔', '╗'))
            .instant([("  ", Text), ("║  Well-Architected Framework Review   ║", Blue)])
            .instant(box_border('╠', '╣'));
        for (pillar, score, color) in [
            ("Security", 9, Green),
            ("Reliability", 8, Green),
            ("Performance", 8, Green),
            ("Cost Optim.", 7, Yellow),
            ("Operations", 8, Green),
        ] {
            script.instant(score_row(pillar, score, color));
        }
        script
            .instant(box_border('╚', '╝'))
            .hold(Pause::Medium)
            .approval("Proceed to Bicep planning? ");

        // Step 3: Bicep plan
        script
            .agent("@bicep-plan", " - Creating module structure...")
            .blank()
            .instant([("  ", Text), ("📁", Text), (" infra/bicep/patient-portal/", Cyan)]);
        let modules = [
            ("main.bicep", "orchestrator"),
            ("network.bicep", "VNet, NSGs"),
            ("security.bicep", "Key Vault, WAF"),
            ("database.bicep", "Azure SQL"),
            ("app-service.bicep", "Web App"),
            ("monitoring.bicep", "Log Analytics"),
        ];
        for (i, (file, note)) in modules.iter().enumerate() {
            let branch = if i + 1 == modules.len() { "└── " } else { "├── " };
            script.instant(tree_row(branch, file, note));
        }
        script
            .hold(Pause::Medium)
            .approval("Generate Bicep templates? ");

        // Step 4: implementation
        script
            .agent("@bicep-implement", " - Generating templates...")
            .blank();
        for percent in [20, 40, 60, 80, 100] {
            script.set_last(progress_row(percent)).hold(Pause::Short);
        }
        script.hold(Pause::Short);

        // Validation
        script
            .blank()
            .typed([("  ", Text), ("Running ", Text), ("bicep build", Blue), ("...", Dim)])
            .hold(Pause::Medium)
            .instant([("  ", Text), ("✓", Green), (" Build succeeded: 0 errors", Text)])
            .blank()
            .typed([("  ", Text), ("Running ", Text), ("bicep lint", Blue), ("...", Dim)])
            .hold(Pause::Short)
            .instant([("  ", Text), ("✓", Green), (" Lint passed: 0 warnings", Text)])
            .hold(Pause::Medium);

        // Final summary
        let rule = "═".repeat(50);
        script
            .blank()
            .instant([(rule.as_str(), Green)])
            .instant([("  ", Text), ("✅ ", Green), ("Deployment Ready!", White)])
            .instant([(rule.as_str(), Green)])
            .blank()
            .instant([("  ", Text), ("Files created:   ", Dim), ("6 Bicep modules", Cyan)])
            .instant([("  ", Text), ("Time elapsed:    ", Dim), ("4 minutes 32 seconds", Cyan)])
            .instant([("  ", Text), ("Time saved:      ", Dim), ("~2 hours (96%)", Green)])
            .blank()
            .instant([
                ("  ", Text),
                ("Run ", Text),
                ("./deploy.ps1", Blue),
                (" to deploy to Azure", Text),
            ])
            .hold(Pause::Final);

        script
    }
}

/// Inner width of the review box, between the vertical borders
const BOX_INNER_WIDTH: usize = 38;
/// Width the module file names are padded to
const TREE_NAME_WIDTH: usize = 19;
/// Cells in the progress bar
const PROGRESS_CELLS: usize = 20;

fn box_border(left: char, right: char) -> Line {
    let border = format!("{left}{}{right}", "═".repeat(BOX_INNER_WIDTH));
    Line::from(vec![Segment::new("  ", Text), Segment::new(border, Blue)])
}

fn score_row(pillar: &str, score: usize, color: ColorTag) -> Line {
    let bar = format!("{}{}", "█".repeat(score), "░".repeat(10 - score));
    Line::from(vec![
        Segment::new("  ", Text),
        Segment::new("║  ", Blue),
        Segment::new(format!("{pillar:<14}"), Text),
        Segment::new(bar, color),
        Segment::new(format!("  {score}/10      "), color),
        Segment::new("║", Blue),
    ])
}

fn tree_row(branch: &str, file: &str, note: &str) -> Line {
    let padding = TREE_NAME_WIDTH.saturating_sub(file.chars().count());
    Line::from(vec![
        Segment::new("     ", Text),
        Segment::new(branch, Dim),
        Segment::new(file, Text),
        Segment::new(format!("{}({note})", " ".repeat(padding)), Dim),
    ])
}

fn progress_row(percent: usize) -> Line {
    let filled = percent * PROGRESS_CELLS / 100;
    let bar = format!("[{}{}]", "█".repeat(filled), "░".repeat(PROGRESS_CELLS - filled));
    let color = if percent == 100 { Green } else { Yellow };
    Line::from(vec![
        Segment::new("  ", Text),
        Segment::new("Generating: ", Text),
        Segment::new(bar, color),
        Segment::new(format!(" {percent}%"), Text),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_rows_align() {
        let top = box_border('╔', '╗');
        let row = score_row("Security", 9, Green);
        assert_eq!(top.char_count(), row.char_count());
        assert_eq!(top.char_count(), 2 + BOX_INNER_WIDTH + 2);
    }

    #[test]
    fn test_score_row_bar() {
        let row = score_row("Cost Optim.", 7, Yellow);
        assert_eq!(row.segments()[3].text, "███████░░░");
        assert_eq!(row.segments()[3].color, Yellow);
    }

    #[test]
    fn test_progress_row() {
        let half = progress_row(40);
        assert_eq!(half.segments()[2].text, "[████████░░░░░░░░░░░░]");
        assert_eq!(half.segments()[2].color, Yellow);
        assert_eq!(progress_row(100).segments()[2].color, Green);
    }

    #[test]
    fn test_tree_row_padding() {
        let a = tree_row("├── ", "main.bicep", "orchestrator");
        let b = tree_row("└── ", "monitoring.bicep", "Log Analytics");
        assert_eq!(a.segments()[3].text, "         (orchestrator)");
        assert_eq!(b.segments()[3].text, "   (Log Analytics)");
    }

    #[test]
    fn test_expected_frames_simple() {
        let timing = Timing::default();
        let mut script = Script::new();
        script
            .blank()
            .typed([("abcd", Text)])
            .instant([("x", Text)])
            .hold(Pause::Medium);
        // 4 chars at stride 3 -> 2, plus short pause, instant 2, medium 15
        assert_eq!(script.expected_frames(&timing), 2 + 8 + 2 + 15);
    }

    #[test]
    fn test_workflow_ends_with_final_hold() {
        let script = Script::agentic_workflow();
        assert_eq!(script.steps().last(), Some(&Step::Hold(Pause::Final)));
        assert!(matches!(script.steps()[0], Step::Append(_)));
    }
}
