//! Skill proficiency bars.

use folio_core::content::Skill;
use leptos::prelude::*;

/// Width of the filled part of a bar.
pub fn level_style(level: u8) -> String {
    format!("width: {}%;", level.min(100))
}

#[component]
pub fn SkillBar(skill: Skill) -> impl IntoView {
    let Skill {
        name,
        level,
        icon,
        description,
    } = skill;
    let fill = level_style(level);

    view! {
      <div class="folio-skill" title=description>
        <div class="folio-skill-header">
          <span class="folio-skill-icon" aria-hidden="true">
            {icon}
          </span>
          <span class="folio-skill-name">{name.clone()}</span>
          <span class="folio-skill-level">{format!("{level}%")}</span>
        </div>
        <div
          class="folio-skill-track"
          role="progressbar"
          aria-label=name
          aria-valuemin="0"
          aria-valuemax="100"
          aria-valuenow=level.to_string()
        >
          <div class="folio-skill-fill" style=fill></div>
        </div>
      </div>
    }
}
