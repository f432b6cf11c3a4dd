mod mock_resolvers;

pub use mock_resolvers::MockNsResolver;
