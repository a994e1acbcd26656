#[cfg(test)]
mod common;

#[cfg(test)]
mod session_restore_tests;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod register_tests;

#[cfg(test)]
mod logout_tests;

#[cfg(test)]
mod collection_tests;

#[cfg(test)]
mod dashboard_tests;

#[cfg(test)]
mod route_flow_tests;
