use mandelview_core::{escape_time, IterationBudget, Viewport};

/// Compute every pixel of a viewport and collect the counts into a flat Vec.
fn compute_grid(viewport: &Viewport, budget: IterationBudget) -> Vec<u32> {
    let mut counts = Vec::with_capacity(viewport.pixel_count());
    for py in 0..viewport.height {
        for px in 0..viewport.width {
            let c = viewport.pixel_to_complex(px, py);
            counts.push(escape_time(c, budget));
        }
    }
    counts
}

#[test]
fn full_grid_has_escaped_and_interior_points() {
    let viewport = Viewport::with_canvas(100, 100).unwrap();
    let budget = IterationBudget::new(256).unwrap();

    let counts = compute_grid(&viewport, budget);
    assert_eq!(counts.len(), 100 * 100);

    // At zoom 1 the view contains both the set and its surroundings.
    let interior = counts.iter().filter(|&&n| n == budget.get()).count();
    let escaped = counts.len() - interior;
    assert!(escaped > 0, "should have some escaped points");
    assert!(interior > 0, "should have some presumed-interior points");

    // Every count respects the budget.
    assert!(counts.iter().all(|&n| n <= budget.get()));
}

#[test]
fn grid_is_deterministic() {
    let viewport = Viewport::with_canvas(80, 60).unwrap();
    let budget = IterationBudget::new(128).unwrap();

    let run1 = compute_grid(&viewport, budget);
    let run2 = compute_grid(&viewport, budget);
    assert_eq!(run1, run2, "identical inputs must produce identical grids");
}

#[test]
fn escaped_counts_survive_budget_increase() {
    let viewport = Viewport::with_canvas(64, 64).unwrap();
    let small = IterationBudget::new(64).unwrap();
    let large = small.double().double();

    let coarse = compute_grid(&viewport, small);
    let fine = compute_grid(&viewport, large);

    for (a, b) in coarse.iter().zip(fine.iter()) {
        if *a < small.get() {
            // Escaped under the small budget: the recorded step is final.
            assert_eq!(a, b);
        } else {
            // Presumed interior: the count can only grow with the budget.
            assert!(*b >= *a);
        }
    }
}

#[test]
fn non_square_grid_is_horizontally_centred() {
    // On a 1280×720 canvas the square spans columns 280..1000; the set lives
    // inside [-2, 2], so everything left of the square escapes quickly.
    let viewport = Viewport::with_canvas(1280, 720).unwrap();
    let budget = IterationBudget::new(64).unwrap();

    let c = viewport.pixel_to_complex(0, 360);
    assert!(c.re < -2.0);
    assert!(escape_time(c, budget) < budget.get());
}
