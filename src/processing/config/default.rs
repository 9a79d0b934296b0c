use super::traits::DispatchConfig;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultDispatchConfig {
    max_concurrent: Option<usize>,
    create_dest_dirs: bool,
    report_outcomes: bool,
}

impl DefaultDispatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_concurrent(mut self, max_concurrent: Option<usize>) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    pub fn with_create_dest_dirs(mut self, enable: bool) -> Self {
        self.create_dest_dirs = enable;
        self
    }

    pub fn with_outcome_reporting(mut self, enable: bool) -> Self {
        self.report_outcomes = enable;
        self
    }
}

impl Default for DefaultDispatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent: None,
            create_dest_dirs: false,
            report_outcomes: true,
        }
    }
}

impl DispatchConfig for DefaultDispatchConfig {
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
