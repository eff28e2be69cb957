mod mock_project_fs;
mod test_files;

pub use mock_project_fs::MockProjectFs;
pub use test_files::TestFiles;
