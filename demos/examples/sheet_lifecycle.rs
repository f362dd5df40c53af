// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted bottom-sheet lifecycle driven entirely without a UI host.
//!
//! This example plays the role of the host: it runs the tweens the
//! controller requests, feeds sampled values back, and prints the outputs a
//! view layer would render. It walks through mount auto-open, a drag that
//! settles at the upper snap, keyboard reflow, and a downward fling that
//! dismisses the sheet.
//!
//! Run:
//! - `cargo run -p undersheet_demos --example sheet_lifecycle`

use kurbo::Point;
use undersheet_sheet::{
    AnimationRequest, DismissFlags, SheetConfig, SheetController, SheetEvent,
};
use undersheet_snap::SnapPoint;
use undersheet_tween::Tween;

const SCREEN_HEIGHT: f64 = 800.0;

/// Run a requested tween to completion in fixed 50 ms steps, feeding every
/// sampled frame back into the controller.
fn run_animation(sheet: &mut SheetController, request: AnimationRequest) {
    let tween = Tween::new(request.from, request.to, request.spec);
    let mut elapsed = 0;
    loop {
        let value = tween.sample(elapsed);
        sheet.animation_frame(request.token, value);
        println!(
            "  tick {elapsed:>4} ms: height {:7.2}  backdrop {:.3}",
            sheet.live_height(),
            sheet.backdrop_opacity()
        );
        if tween.is_finished(elapsed) {
            break;
        }
        elapsed += 50;
    }
    sheet.animation_complete(request.token);
}

fn report_events(sheet: &mut SheetController) {
    for event in sheet.drain_events() {
        match event {
            SheetEvent::IndexChanged(index) => println!("  -> now settled at snap {index}"),
            SheetEvent::Dismissed => println!("  -> dismissed; host pops the presentation"),
        }
    }
}

/// Screen position whose candidate height is `height` (no keyboard).
fn finger_at(height: f64) -> Point {
    Point::new(40.0, SCREEN_HEIGHT - height)
}

fn main() {
    let config = SheetConfig::new(vec![SnapPoint::Px(500.0), "75%".parse().unwrap()])
        .with_dismiss(DismissFlags::all());
    let mut sheet = SheetController::new(config, SCREEN_HEIGHT);
    println!("snap heights: {:?}", sheet.snap_heights().as_slice());

    println!("mount: auto-open to the first snap");
    let open = sheet.mount().expect("snap points are configured");
    run_animation(&mut sheet, open);
    report_events(&mut sheet);

    println!("drag up past the midpoint and release");
    sheet.drag_start(finger_at(500.0));
    for height in [530.0, 560.0, 585.0] {
        sheet.drag_move(finger_at(height));
        println!("  dragging: height {:7.2}", sheet.live_height());
    }
    if let Some(settle) = sheet.drag_end(finger_at(585.0), -120.0) {
        run_animation(&mut sheet, settle);
    }
    report_events(&mut sheet);

    println!("keyboard appears (300 px) and hides again");
    sheet.keyboard_shown(300.0);
    println!("  reflowed height {:7.2}", sheet.live_height());
    sheet.keyboard_hidden();
    println!("  restored height {:7.2}", sheet.live_height());

    println!("fling downward at screen-height velocity");
    sheet.drag_start(finger_at(600.0));
    sheet.drag_move(finger_at(550.0));
    if let Some(close) = sheet.drag_end(finger_at(550.0), SCREEN_HEIGHT) {
        run_animation(&mut sheet, close);
    }
    report_events(&mut sheet);
}
