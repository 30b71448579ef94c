//! The runner is responsible for reading an operations file, replaying every
//! request against an account service, and writing the responses to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner implementations.
//! Both produce identical output for the same input and starting state.
//!
mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::run;

#[cfg(test)]
pub(crate) mod fixtures {
    /// Expected output of replaying `data/example_input.csv` against a seeded store.
    pub const EXAMPLE_OUTPUT: &str = "seq,op,status,id,email,username,credential,message
1,list,200,1,first@mail.com,first,firstPassword,
1,list,200,2,second@mail.com,second,secondPassword,
1,list,200,3,third@mail.com,third,thirdPassword,
2,list,200,4,fourth@mail.com,fourth,fourthPassword,
2,list,200,5,fifth@mail.com,fifth,fifthPassword,
3,create,200,6,sixth@mail.com,sixth,sixthPassword,
4,create,400,,,,,Account with id 1 already exists
5,read,200,6,sixth@mail.com,sixth,sixthPassword,
6,update,200,6,sixth@mail.com,sixth,sixthPassword,
7,delete,200,3,third@mail.com,third,thirdPassword,
8,read,404,,,,,Account with id 3 not found
9,list,200,6,sixth@new.com,sixthNew,newPassword,
10,list,400,,,,,Page can't be less than 1 and size can't be less than 0
11,create,400,,,,,Account id can't be null
";

    /// Expected output of replaying `data/seed_pages.csv` against a seeded store.
    pub const SEED_PAGES_OUTPUT: &str = "seq,op,status,id,email,username,credential,message
1,list,200,1,first@mail.com,first,firstPassword,
1,list,200,2,second@mail.com,second,secondPassword,
1,list,200,3,third@mail.com,third,thirdPassword,
2,list,200,4,fourth@mail.com,fourth,fourthPassword,
2,list,200,5,fifth@mail.com,fifth,fifthPassword,
3,list,200,4,fourth@mail.com,fourth,fourthPassword,
3,list,200,5,fifth@mail.com,fifth,fifthPassword,
4,list,200,,,,,
";
}
