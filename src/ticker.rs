//! Tick Driver
//!
//! Periodically ticks every running timer. The store never schedules itself.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::context::TimerContext;

/// Spawn the loop; it lives as long as the page
pub fn spawn_ticker(ctx: TimerContext, period_ms: u32) {
    log::debug!("tick driver started, period {} ms", period_ms);
    spawn_local(async move {
        loop {
            TimeoutFuture::new(period_ms).await;
            tick_running(&ctx);
        }
    });
}

fn tick_running(ctx: &TimerContext) {
    for id in ctx.running_ids_untracked() {
        ctx.tick(&id);
        if ctx.timer_untracked(&id).is_some_and(|t| t.is_finished()) {
            log::info!("timer {} finished", id);
        }
    }
}
