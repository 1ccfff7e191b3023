use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::cell::RefCell;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
    monitor: RefCell<SystemMonitor>,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: RefCell::new(SystemMonitor::new(monitor_enabled)),
        }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting report run...");

        // Extract
        let raw_data = self.pipeline.extract()?;
        self.monitor.borrow_mut().log_phase("Extract");

        // Transform
        let transformed = self.pipeline.transform(raw_data)?;
        self.monitor.borrow_mut().log_phase("Transform");

        // Load
        let output_path = self.pipeline.load(transformed)?;
        self.monitor.borrow_mut().log_phase("Load");
        self.monitor.borrow_mut().log_final_stats();

        tracing::info!("Output saved to: {}", output_path);
        Ok(output_path)
    }
}
