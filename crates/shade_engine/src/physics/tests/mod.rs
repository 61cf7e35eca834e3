//! Whole-frame scenarios: step, collide, resolve
