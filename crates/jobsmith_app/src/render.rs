//! Text rendering of view models. Pure functions; printing is the
//! caller's job.

use jobsmith_core::{AppViewModel, JobViewModel, NoticeKind, Screen, SkillSearchViewModel};

pub fn render(view: &AppViewModel) -> String {
    match view.screen {
        Screen::Job => render_job(&view.job),
        Screen::Skills => render_skills(&view.skills),
    }
}

fn render_job(job: &JobViewModel) -> String {
    let mut out = String::from("== Job Description ==\n");
    if job.loading {
        out.push_str("Loading...\n");
        return out;
    }
    if let Some(reason) = &job.error {
        out.push_str(&format!("Error: {reason}\n"));
        return out;
    }
    out.push_str(&format!("Description:\n{}\n", job.description));
    push_section(&mut out, "Key Responsibilities", &job.responsibilities);
    push_section(&mut out, "Requirements", &job.requirements);
    push_section(&mut out, "Benefits", &job.benefits);
    if !job.skills.is_empty() {
        out.push_str("\nRecommended skills (toggle <id> to select):\n");
        for skill in &job.skills {
            let marker = if skill.selected { "[x]" } else { "[ ]" };
            out.push_str(&format!("  {} {} {}\n", marker, skill.id, skill.name));
        }
    }
    out
}

fn push_section(out: &mut String, title: &str, items: &[String]) {
    out.push_str(&format!("\n{title}:\n"));
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}

fn render_skills(skills: &SkillSearchViewModel) -> String {
    let mut out = String::from("== Skill Search ==\n");
    if let Some(notice) = &skills.notice {
        let prefix = match notice.kind {
            NoticeKind::Confirmation => "OK",
            NoticeKind::Failure => "FAILED",
        };
        out.push_str(&format!("{}: {}\n", prefix, notice.text));
    }
    if skills.loading {
        out.push_str("Loading...\n");
        return out;
    }
    if let Some(reason) = &skills.error {
        out.push_str(&format!("Error fetching search results: {reason}\n"));
        return out;
    }
    if let Some(message) = &skills.no_results {
        out.push_str(&format!("{message}\n"));
        return out;
    }
    if !skills.rows.is_empty() {
        out.push_str(&format!(
            "{:<10} {:<30} {:>8}\n",
            "Skill ID", "Skill Name", "Distance"
        ));
        for row in &skills.rows {
            out.push_str(&format!(
                "{:<10} {:<30} {:>8}\n",
                row.id, row.name, row.distance
            ));
        }
    }
    out
}
