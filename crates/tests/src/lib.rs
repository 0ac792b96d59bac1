#[cfg(test)]
mod common;

#[cfg(test)]
mod walker_tests;

#[cfg(test)]
mod depth_filter_tests;


#[cfg(test)]
mod scan_scenario_tests;


#[cfg(test)]
mod snapshot_tests;

#[cfg(test)]
mod mount_tests;
