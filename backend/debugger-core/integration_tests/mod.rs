mod requester;
