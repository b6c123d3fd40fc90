//! One run of the remote: resolve the target, then render or act

use std::io::Write;

use tracing::debug;

use crate::actions::{Dispatcher, ScopePolicy};
use crate::cli::{Invocation, OutputMode, Target};
use crate::controller::SpeakerController;
use crate::error::{BarError, ControllerError};
use crate::menu::{self, MenuConfig, MenuLine, MenuRenderer, MenuSnapshot};
use crate::model::Speaker;
use crate::topology;

/// Find the speaker the invocation names
pub fn resolve_target<C: SpeakerController>(controller: &C, target: &Target) -> Result<Speaker, BarError> {
    match target {
        Target::Address(address) => Ok(controller.speaker_at(address)?),
        Target::Name(name) => {
            let not_found = || ControllerError::SpeakerNotFound(name.clone());
            let anchor = controller.discover_one()?.ok_or_else(not_found)?;
            let groups = controller.groups(&anchor)?;
            let speaker = topology::find_by_name(&groups, name).cloned().ok_or_else(not_found)?;
            Ok(speaker)
        }
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[MenuLine]) -> Result<(), BarError> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn render_menu<C, W>(
    controller: &C,
    anchor: Option<&Speaker>,
    invocation: &Invocation,
    config: &MenuConfig,
    out: &mut W,
) -> Result<(), BarError>
where
    C: SpeakerController,
    W: Write,
{
    let snapshot = match anchor {
        Some(anchor) => match MenuSnapshot::collect(controller, anchor) {
            Ok(snapshot) => Some(snapshot),
            Err(BarError::DiscoveryEmpty) => None,
            Err(e) => return Err(e),
        },
        None => None,
    };

    match snapshot {
        Some(snapshot) => write_lines(out, &MenuRenderer::new(config).render(&snapshot)),
        None if invocation.output == OutputMode::Menu => write_lines(out, &menu::no_speakers_menu()),
        None => {
            debug!("no speakers found");
            Ok(())
        }
    }
}

/// Carry out `invocation`, writing menu and feedback lines to `out`
pub fn run<C, W>(controller: &C, invocation: &Invocation, config: &MenuConfig, out: &mut W) -> Result<(), BarError>
where
    C: SpeakerController,
    W: Write,
{
    let target = invocation
        .target
        .as_ref()
        .map(|target| resolve_target(controller, target))
        .transpose()?;

    let speaker = match target {
        Some(speaker) if invocation.output != OutputMode::Menu => speaker,
        target => {
            let anchor = match target {
                Some(speaker) => Some(speaker),
                None => controller.discover_one()?,
            };
            return render_menu(controller, anchor.as_ref(), invocation, config, out);
        }
    };

    let speaker = if invocation.group_scope {
        let groups = controller.groups(&speaker)?;
        topology::group_of(&groups, &speaker)?.coordinator.clone()
    } else {
        speaker
    };

    let Some(action) = &invocation.action else {
        debug!(speaker = %speaker.name, "nothing to do");
        return Ok(());
    };

    let policy = ScopePolicy::new(invocation.group_scope);
    if invocation.output == OutputMode::Verbose {
        writeln!(out, "{}", policy.feedback(action))?;
    }
    Dispatcher::new(controller, policy).dispatch(&speaker, action)?;
    debug!(speaker = %speaker.name, "action completed");
    Ok(())
}
