//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use dotpattern::io::progress::ProgressManager;
    use std::path::Path;

    // Tests each completed image advances the bar by one
    // Verified by incrementing on start instead of completion
    #[test]
    fn test_progress_counts_completed_images() {
        let pm = ProgressManager::new(3);

        pm.start_image(Path::new("out_1.png"));
        assert_eq!(pm.position(), 0);
        pm.complete_image();
        pm.start_image(Path::new("out_2.png"));
        pm.complete_image();
        assert_eq!(pm.position(), 2);

        pm.finish();
    }

    #[test]
    fn test_progress_handles_pathless_names() {
        let pm = ProgressManager::new(1);
        pm.start_image(Path::new(""));
        pm.complete_image();
        pm.finish();
        assert_eq!(pm.position(), 1);
    }
}
