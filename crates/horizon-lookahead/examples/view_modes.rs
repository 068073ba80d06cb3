//! Horizon Lookahead view mode walkthrough
//!
//! Four coloured items are shown as a column, in two columns, panned apart,
//! expanded, and with one of them opened in a detail view. Every change is a
//! plain tree rebuild; the items glide to their new places on their own.
//! Frames are printed as text.
//!
//! Run with: cargo run -p horizon-lookahead --example view_modes [config.toml]

use std::fmt;

use horizon_lookahead::config::TransitionConfig;
use horizon_lookahead::geometry::{Constraints, Offset};
use horizon_lookahead::layout::{
    Block, Center, Insets, LayoutNode, Linear, Overlay, Padding, SizedBox, Translate, element,
};
use horizon_lookahead::transition::{ChildId, TransitionContainer};
use horizon_lookahead::{AnimationRuntime, RuntimeConfig};
use tracing_subscriber::EnvFilter;

const COLORS: [&str; 4] = ["coral", "amber", "teal", "green"];

/// Longest any mode is given to settle.
const MAX_FRAMES: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Column,
    Row,
    Panning,
    Expand,
    Detail,
}

impl ViewMode {
    const TOUR: [ViewMode; 6] = [
        ViewMode::Column,
        ViewMode::Row,
        ViewMode::Panning,
        ViewMode::Expand,
        ViewMode::Detail,
        ViewMode::Column,
    ];

    fn tree(self, items: &[ChildId]) -> Box<dyn LayoutNode> {
        let item = |id: ChildId| SizedBox::fill_width(80).with_child(element(id));
        match self {
            ViewMode::Column => Box::new(
                items
                    .iter()
                    .fold(Linear::column(), |column, &id| column.with_child(item(id))),
            ),
            ViewMode::Row => Box::new(two_columns(items, Offset::ZERO, |_| true, item)),
            ViewMode::Panning => Box::new(two_columns(items, Offset::new(300, 0), |_| true, item)),
            ViewMode::Expand => Box::new(items.iter().fold(Linear::column(), |column, &id| {
                column.with_child(
                    SizedBox::fill_width(150).with_child(Padding::new(Insets::new(0, 0, 0, 30), element(id))),
                )
            })),
            ViewMode::Detail => {
                let opened = items[1];
                Box::new(
                    Overlay::new()
                        .with_child(two_columns(items, Offset::ZERO, |id| id != opened, item))
                        .with_child(Block::fill("backdrop"))
                        .with_child(Center::new(SizedBox::fixed(200, 200).with_child(element(opened)))),
                )
            }
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Column => "Column",
            ViewMode::Row => "2 Row",
            ViewMode::Panning => "Panning",
            ViewMode::Expand => "Expand",
            ViewMode::Detail => "Detail",
        };
        f.write_str(name)
    }
}

/// Even items on the left, odd items on the right, each column shifted
/// `spread` away from the centre.
fn two_columns<N: LayoutNode + 'static>(
    items: &[ChildId],
    spread: Offset,
    keep: impl Fn(ChildId) -> bool,
    item: impl Fn(ChildId) -> N,
) -> Linear {
    let (mut left, mut right) = (Linear::column(), Linear::column());
    for (index, &id) in items.iter().enumerate() {
        if !keep(id) {
            continue;
        }
        if index % 2 == 0 {
            left = left.with_child(item(id));
        } else {
            right = right.with_child(item(id));
        }
    }
    Linear::row()
        .with_weighted_child(Translate::new(-spread, left), 1.0)
        .with_weighted_child(Translate::new(spread, right), 1.0)
}

fn print_frame(container: &TransitionContainer, frame: usize) {
    println!("  frame {frame:>3}");
    for placement in container.placements() {
        let rect = placement.rect;
        println!(
            "    {:<8} x={:>5} y={:>5} {}x{}",
            placement.label, rect.origin.x, rect.origin.y, rect.size.width, rect.size.height
        );
    }
}

fn main() -> horizon_lookahead::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("horizon_lookahead=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => TransitionConfig::load(path)?,
        None => TransitionConfig::default(),
    };
    let frame_interval = config.timing()?.frame_interval;

    let runtime = AnimationRuntime::new(RuntimeConfig::current_thread())?;
    let mut container = TransitionContainer::with_handle(runtime.handle().clone()).with_config(config);

    let mut items = Vec::with_capacity(COLORS.len());
    for color in COLORS {
        let element_config = container
            .scope()
            .element_config()
            .on_animate_start(move || println!("  * {color} started"))
            .on_animate_finish(move || println!("  * {color} finished"))
            .on_animate_cancel(move || println!("  * {color} cancelled"));
        items.push(container.scope_mut().shared_element(Block::fill(color), element_config)?);
    }

    let bounds = Constraints::new(400, 400, 0, 800);
    for mode in ViewMode::TOUR {
        println!("== {mode}");
        container.set_children(vec![mode.tree(&items)]);

        for frame in 0..MAX_FRAMES {
            container.layout(bounds);
            if frame % 8 == 0 {
                print_frame(&container, frame);
            }
            runtime.advance(frame_interval);
            // The first frame only publishes targets; tasks start after it.
            if frame > 0 && !container.is_running_transition() {
                container.layout(bounds);
                print_frame(&container, frame + 1);
                break;
            }
        }
    }

    Ok(())
}
