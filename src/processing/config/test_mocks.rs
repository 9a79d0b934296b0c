// テスト用の設定モック実装

use super::traits::DispatchConfig;

pub struct MockDispatchConfig {
    pub max_concurrent: Option<usize>,
    pub create_dest_dirs: bool,
    pub report_outcomes: bool,
}

impl DispatchConfig for MockDispatchConfig {
    fn max_concurrent_tasks(&self) -> Option<usize> {
        self.max_concurrent
    }

    fn create_dest_dirs(&self) -> bool {
        self.create_dest_dirs
    }

    fn report_outcomes(&self) -> bool {
        self.report_outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_config_trait_object() {
        let config = MockDispatchConfig {
            max_concurrent: Some(2),
            create_dest_dirs: true,
            report_outcomes: false,
        };

        let config_ref: &dyn DispatchConfig = &config;
        assert_eq!(config_ref.max_concurrent_tasks(), Some(2));
        assert!(config_ref.create_dest_dirs());
        assert!(!config_ref.report_outcomes());
    }
}
