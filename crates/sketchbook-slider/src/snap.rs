/// Nearest coordinate to `target` and its index.
///
/// Linear scan; on equal distance the lower index wins. `coordinates` must
/// not be empty.
pub fn closest(coordinates: &[f32], target: f32) -> (f32, usize) {
    let mut best = (coordinates[0], 0);
    let mut best_distance = (coordinates[0] - target).abs();
    for (i, &x) in coordinates.iter().enumerate().skip(1) {
        let distance = (x - target).abs();
        if distance < best_distance {
            best = (x, i);
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::closest;

    #[test]
    fn picks_nearest() {
        let xs = [0.0, 10.0, 20.0, 30.0];
        assert_eq!(closest(&xs, 12.0), (10.0, 1));
        assert_eq!(closest(&xs, 18.0), (20.0, 2));
        assert_eq!(closest(&xs, -50.0), (0.0, 0));
        assert_eq!(closest(&xs, 1e6), (30.0, 3));
    }

    #[test]
    fn ties_go_to_lower_index() {
        let xs = [0.0, 10.0, 20.0];
        assert_eq!(closest(&xs, 5.0), (0.0, 0));
        assert_eq!(closest(&xs, 15.0), (10.0, 1));
    }

    #[test]
    fn no_index_is_strictly_closer() {
        let xs: Vec<f32> = (0..13).map(|i| 7.5 + 23.25 * i as f32).collect();
        let mut p = -40.0f32;
        while p < 400.0 {
            let (value, index) = closest(&xs, p);
            assert_eq!(value, xs[index]);
            let d = (value - p).abs();
            for (j, x) in xs.iter().enumerate() {
                let dj = (x - p).abs();
                assert!(dj >= d, "index {j} is closer to {p} than {index}");
                if dj == d {
                    assert!(index <= j);
                }
            }
            p += 0.37;
        }
    }
}
